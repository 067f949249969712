//! Registration API - Application entry point
//!
//! CLI-based entry point that dispatches to the available commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registration_api::{
    cli::{Cli, Commands},
    commands,
    config::{Config, HashingConfig},
    AppResult,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        tracing::error!("Command failed: {:?}", e);
        std::process::exit(1);
    }
}

/// Dispatch a command; configuration errors are fatal
async fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::Serve(args) => {
            let config = Config::from_env()?;
            tracing::debug!(?config, "Configuration loaded");
            commands::serve::execute(args, config).await
        }
        Commands::Hash(args) => {
            let config = HashingConfig::from_env()?;
            commands::hash::execute(args, config).await
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
