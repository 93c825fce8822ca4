//! User command - record lookups and lifecycle from the shell.
//!
//! Output is rendered as pretty JSON of [`UserResponse`], so password
//! hashes never reach the terminal.

use serde_json::json;

use common::{AppError, AppResult};
use domain::{User, UserResponse};

use crate::cli::UserAction;
use crate::service::UserService;

/// Run a user action and return the text to print.
pub async fn execute(action: UserAction, service: &dyn UserService) -> AppResult<String> {
    match action {
        UserAction::Get { id } => render_user(&service.get_user(id).await?),
        UserAction::Find { email } => render_user(&service.get_user_by_email(&email).await?),
        UserAction::Create {
            email,
            password,
            name,
            city,
        } => {
            let user = service.register_user(email, password, name, city).await?;
            render_user(&user)
        }
        UserAction::Update {
            id,
            name,
            city,
            clear_city,
            role,
        } => {
            let city = if clear_city { Some(None) } else { city.map(Some) };
            render_user(&service.update_user(id, name, city, role).await?)
        }
        UserAction::Delete { id } => {
            tracing::warn!(user_id = id, "Deleting user");
            service.delete_user(id).await?;
            to_pretty(&json!({ "deleted": id }))
        }
        UserAction::List => {
            let users: Vec<UserResponse> = service
                .list_users()
                .await?
                .into_iter()
                .map(UserResponse::from)
                .collect();
            to_pretty(&users)
        }
        UserAction::Count => to_pretty(&json!({ "count": service.count_users().await? })),
    }
}

fn render_user(user: &User) -> AppResult<String> {
    to_pretty(&UserResponse::from(user))
}

fn to_pretty<T: serde::Serialize + ?Sized>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Utc;
    use domain::UserRole;

    use crate::repository::MockUserRepository;
    use crate::service::UserManager;

    fn stored_user() -> User {
        User {
            id: 1,
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$secret-hash".to_string(),
            name: "Alice".to_string(),
            city: None,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_renders_json_without_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "a@example.com")
            .returning(|_| Ok(Some(stored_user())));
        let service = UserManager::new(Arc::new(repo));

        let output = execute(
            UserAction::Find {
                email: "a@example.com".to_string(),
            },
            &service,
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["email"], "a@example.com");
        assert!(!output.contains("secret-hash"));
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        let service = UserManager::new(Arc::new(repo));

        let result = execute(
            UserAction::Find {
                email: "missing@example.com".to_string(),
            },
            &service,
        )
        .await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_count_output() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().returning(|| Ok(3));
        let service = UserManager::new(Arc::new(repo));

        let output = execute(UserAction::Count, &service).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 3);
    }
}
