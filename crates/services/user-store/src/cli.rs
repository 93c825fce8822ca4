//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// User store - integer-keyed user records with lookup by email
#[derive(Parser, Debug)]
#[command(name = "user-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides USER_STORE_DATABASE_URL / DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Read and write user records
    User(UserArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the user command
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

/// User record actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Show a user by id
    Get { id: i32 },

    /// Find a user by exact email (case-sensitive)
    Find {
        #[arg(long)]
        email: String,
    },

    /// Create a user
    Create {
        #[arg(long)]
        email: String,
        #[arg(long, env = "USER_STORE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        city: Option<String>,
    },

    /// Update name, city or role of a user
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_city")]
        city: Option<String>,
        /// Remove the stored city
        #[arg(long)]
        clear_city: bool,
        #[arg(long)]
        role: Option<String>,
    },

    /// Permanently delete a user
    Delete { id: i32 },

    /// List all users
    List,

    /// Print the number of users
    Count,
}
