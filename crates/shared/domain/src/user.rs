//! User domain entity and related types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_USER};
use crate::password::Password;

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
        }
    }
}

/// Unknown role strings fall back to [`UserRole::User`].
impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity.
///
/// `id` is a surrogate key assigned by the store on creation and never
/// changes afterwards. `email` is unique across all stored users; the
/// backing table enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.clone())
    }

    /// Check a plain text password against the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.password().verify(plain_text)
    }
}

/// Data for a user that has not been stored yet (no id).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: Password,
    pub name: String,
    pub city: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    /// New user with the default role.
    pub fn new(email: impl Into<String>, password: Password, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password,
            name: name.into(),
            city: None,
            role: UserRole::User,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

/// Partial update of a stored user. `None` leaves a field untouched.
///
/// `city` is nullable: `Some(None)` clears it. `id` and `email` are not
/// updatable.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub city: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub password: Option<Password>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.role.is_none() && self.password.is_none()
    }
}

/// User view that is safe to print or send (no password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            city: user.city,
            role: user.role.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse::from(user.clone())
    }
}
