//! Domain-level errors.
//!
//! Business rule violations, independent of the persistence engine.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Password-related errors
    #[error("Password error: {0}")]
    Password(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
