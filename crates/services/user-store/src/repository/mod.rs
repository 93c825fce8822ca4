//! Repository layer for data access.

mod base;
pub mod entities;
mod user_repository;

pub use base::{KeyOf, Store};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
