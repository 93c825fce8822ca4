//! User repository: typed facade over `Store<user::Entity>`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, Set, SqlErr};

use super::base::Store;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, User, UserChanges};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return `Ok(None)` when nothing matches; only persistence
/// failures are errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by surrogate key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Check whether an email is already taken
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a new user; the store assigns the id
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all users ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<u64>;
}

/// SeaORM-backed user repository.
#[derive(Debug, Clone)]
pub struct UserStore {
    base: Store<UserEntity>,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: Store::new(db),
        }
    }

    /// The embedded generic store.
    pub fn base(&self) -> &Store<UserEntity> {
        &self.base
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        tracing::debug!(user_id = id, "Looking up user by id");
        let result = self.base.find_by_id(id).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        tracing::debug!("Looking up user by email");
        let result = self.base.find_one(user::Column::Email.eq(email)).await?;
        Ok(result.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(new_user.email),
            password_hash: Set(new_user.password.into_string()),
            name: Set(new_user.name),
            city: Set(new_user.city),
            role: Set(new_user.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match self.base.insert(active_model).await {
            Ok(model) => {
                tracing::info!(user_id = model.id, "User created");
                Ok(User::from(model))
            }
            Err(AppError::Database(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Err(AppError::conflict("Email"))
            }
            Err(err) => Err(err),
        }
    }

    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User> {
        let model = self.base.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if changes.is_empty() {
            return Ok(User::from(model));
        }

        let mut active: ActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(city) = changes.city {
            active.city = Set(city);
        }
        if let Some(role) = changes.role {
            active.role = Set(role.to_string());
        }
        if let Some(password) = changes.password {
            active.password_hash = Set(password.into_string());
        }
        active.updated_at = Set(Utc::now());

        let model = self.base.update(active).await?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.base.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        self.base.count().await
    }
}
