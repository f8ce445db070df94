//! Entry point: parse CLI and dispatch to the selected service.

use clap::Parser;
use sportsync::{
    cli::{Cli, Commands},
    commands::{handle_database_service, handle_orchestrator_service, handle_sportmonks_service},
    logging::init_logging,
};

/// Run the selected service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    match cli.command {
        Commands::Database(config) => handle_database_service(config).await?,
        Commands::Sportmonks(config) => handle_sportmonks_service(config).await?,
        Commands::Orchestrator(config) => handle_orchestrator_service(config).await?,
    }

    Ok(())
}
