//! User Store - command-line entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use user_store::{
    cli::{Cli, Commands},
    commands,
    config::UserStoreConfig,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = UserStoreConfig::from_env();
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }
    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = run(cli.command, config).await {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: UserStoreConfig) -> AppResult<()> {
    match command {
        Commands::Migrate(args) => commands::migrate::execute(args.action, &config).await,
        Commands::User(args) => {
            let (_db, service) = user_store::open(&config).await?;
            let output = commands::user::execute(args.action, &service).await?;
            println!("{}", output);
            Ok(())
        }
    }
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
