//! Domain layer - User entity and value objects.
//!
//! Pure types with no persistence dependencies. The store crate maps
//! these to and from its SeaORM models.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{NewUser, User, UserChanges, UserResponse, UserRole};
