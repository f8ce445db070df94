//! CLI argument definitions and parsing structures.

use clap::{Parser, Subcommand};

use crate::config::{DatabaseServiceConfig, OrchestratorConfig, SportmonksConfig};

#[derive(Debug, Parser)]
#[command(
    name = "sportsync",
    version,
    about = "Football data services: provider wrapper, persistence API and sync orchestrator"
)]
pub struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve CRUD and bulk upsert endpoints over the local store
    Database(DatabaseServiceConfig),

    /// Serve read-only league/team endpoints backed by the SportMonks API
    Sportmonks(SportmonksConfig),

    /// Serve sync endpoints that pull from the provider wrapper into the store
    Orchestrator(OrchestratorConfig),
}
