//! Database connection and initialization.

use std::collections::HashSet;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Statement,
};
use sea_orm_migration::{seaql_migrations, MigrationName, MigratorTrait, SchemaManager};

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and run pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        Migrator::up(&db.connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for the migrate command).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(Self::connect_options(config)).await?;
        tracing::debug!(?config, "Database pool opened");
        Ok(Self { connection })
    }

    fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
        let (max, min) = config.pool_bounds();

        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(max)
            .min_connections(min)
            .sqlx_logging(false);
        options
    }

    /// Clone of the pool handle, for repositories.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// All defined migrations with their applied flag, in definition order.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied: HashSet<String> = if self.has_migration_table().await? {
            seaql_migrations::Entity::find()
                .order_by_asc(seaql_migrations::Column::Version)
                .all(&self.connection)
                .await?
                .into_iter()
                .map(|m| m.version)
                .collect()
        } else {
            HashSet::new()
        };

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    async fn has_migration_table(&self) -> Result<bool, DbErr> {
        SchemaManager::new(&self.connection)
            .has_table("seaql_migrations")
            .await
    }

    /// Drop everything and run all migrations again.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check connectivity with a trivial query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pool_size_is_clamped() {
        let config = DatabaseConfig {
            url: "postgres://localhost/user_db".to_string(),
            max_connections: 0,
            min_connections: 0,
        };

        let options = Database::connect_options(&config);

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(0));
    }

    #[test]
    fn test_min_never_exceeds_max() {
        let config = DatabaseConfig {
            url: "postgres://localhost/user_db".to_string(),
            max_connections: 2,
            min_connections: 9,
        };

        let options = Database::connect_options(&config);

        assert_eq!(options.get_max_connections(), Some(2));
        assert_eq!(options.get_min_connections(), Some(2));
    }
}
