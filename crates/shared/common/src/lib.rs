//! Common utilities shared by the store crates.
//!
//! This crate provides:
//! - Application error type and result alias
//! - Database configuration

pub mod config;
pub mod error;

pub use config::DatabaseConfig;
pub use error::{AppError, AppResult, OptionExt};
