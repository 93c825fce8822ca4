//! User service - interprets lookups and enforces user rules.
//!
//! The repository reports absence as `None`; this layer is the caller that
//! decides absence means `NotFound`.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{is_valid_role, NewUser, Password, User, UserChanges, UserRole, MIN_NAME_LENGTH};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Get user by exact email
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Register a new user with a plain text password
    async fn register_user(
        &self,
        email: String,
        password: String,
        name: String,
        city: Option<String>,
    ) -> AppResult<User>;

    /// Update name, city and/or role (`Some(None)` clears the city)
    async fn update_user(
        &self,
        id: i32,
        name: Option<String>,
        city: Option<Option<String>>,
        role: Option<String>,
    ) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Number of users
    async fn count_users(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(AppError::validation("Name must not be empty"));
    }
    Ok(())
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn register_user(
        &self,
        email: String,
        password: String,
        name: String,
        city: Option<String>,
    ) -> AppResult<User> {
        validate_name(&name)?;
        let password = Password::new(&password)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AppError::conflict("Email"));
        }

        let mut new_user = NewUser::new(email, password, name.trim());
        if let Some(city) = city {
            new_user = new_user.with_city(city);
        }

        self.repo.create(new_user).await
    }

    async fn update_user(
        &self,
        id: i32,
        name: Option<String>,
        city: Option<Option<String>>,
        role: Option<String>,
    ) -> AppResult<User> {
        if let Some(name) = &name {
            validate_name(name)?;
        }

        let role = match role {
            Some(role) if !is_valid_role(&role) => {
                return Err(AppError::validation(format!("Invalid role: {}", role)));
            }
            Some(role) => Some(UserRole::from(role.as_str())),
            None => None,
        };

        let changes = UserChanges {
            name: name.map(|n| n.trim().to_string()),
            city,
            role,
            password: None,
        };

        self.repo.update(id, changes).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn count_users(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}
