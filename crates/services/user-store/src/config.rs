//! User store configuration.

use common::DatabaseConfig;

/// Environment prefix for store-specific overrides
pub const ENV_PREFIX: &str = "USER_STORE";

/// User store configuration.
#[derive(Debug, Clone, Default)]
pub struct UserStoreConfig {
    pub database: DatabaseConfig,
}

impl UserStoreConfig {
    /// Load configuration from `.env` and environment variables.
    ///
    /// `USER_STORE_DATABASE_URL` takes precedence over `DATABASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX),
        }
    }

    /// Replace the database URL (e.g. from a CLI flag).
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_prefixed_url_wins() {
        let key = format!("{}_DATABASE_URL", ENV_PREFIX);
        std::env::set_var(&key, "sqlite://prefixed.db");

        let config = UserStoreConfig::from_env();
        std::env::remove_var(&key);

        assert_eq!(config.database.url, "sqlite://prefixed.db");
    }

    #[test]
    fn test_cli_url_overrides_environment() {
        let config = UserStoreConfig::default().with_database_url("sqlite::memory:");

        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(config.database.is_in_memory());
    }
}
