//! User Store Library
//!
//! Integer-keyed user persistence with lookup by email, built on SeaORM.
//!
//! - **repository**: generic `Store<E>` plus the typed `UserStore`
//! - **service**: `UserManager`, which turns empty lookups into `NotFound`
//! - **infra**: connection pool and migrations
//! - **cli** / **commands**: the `user-store` binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::{AppError, AppResult};

use crate::config::UserStoreConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Connect, migrate, and wire the repository into a service.
pub async fn open(config: &UserStoreConfig) -> AppResult<(Database, UserManager)> {
    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = UserManager::new(user_repo);

    Ok((db, user_service))
}
