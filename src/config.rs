//! Service configuration
//!
//! Every setting can come from a command-line flag or an environment variable
//! (a `.env` file in the working directory is loaded first). All settings
//! have defaults; unrelated environment keys are ignored.

use clap::Args;
use reqwest::Client;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::http::{build_client, RetryPolicy};
use crate::peers::{DEFAULT_DATABASE_SERVICE_URL, DEFAULT_SPORTMONKS_SERVICE_URL};
use crate::sportmonks::DEFAULT_BASE_URL;
use crate::storage::Database;

/// Outbound HTTP settings shared by services that call other services.
#[derive(Debug, Clone, Args)]
pub struct HttpClientArgs {
    /// Timeout for each outbound request, in seconds.
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Extra attempts for GET requests that fail to connect or time out.
    #[arg(long, env = "HTTP_MAX_RETRIES", default_value_t = 2)]
    pub http_max_retries: u32,
}

impl HttpClientArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.http_max_retries)
    }

    pub fn build_client(&self) -> Result<Client> {
        build_client(self.timeout())
    }
}

/// Persistence service settings.
#[derive(Debug, Clone, Args)]
pub struct DatabaseServiceConfig {
    /// Address to listen on.
    #[arg(long, env = "DATABASE_BIND_ADDR", default_value = "127.0.0.1:8001")]
    pub bind: SocketAddr,

    /// SQLite database file (defaults to the platform data directory).
    #[arg(long, env = "DB_PATH")]
    pub db_path: Option<PathBuf>,
}

impl DatabaseServiceConfig {
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Database::default_path(),
        }
    }
}

/// Provider wrapper settings.
#[derive(Debug, Clone, Args)]
pub struct SportmonksConfig {
    /// Address to listen on.
    #[arg(long, env = "SPORTMONKS_BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Provider access token.
    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Provider base URL.
    #[arg(long, env = "BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(flatten)]
    pub http: HttpClientArgs,
}

/// Orchestrator settings.
#[derive(Debug, Clone, Args)]
pub struct OrchestratorConfig {
    /// Address to listen on.
    #[arg(long, env = "ORCHESTRATOR_BIND_ADDR", default_value = "127.0.0.1:8002")]
    pub bind: SocketAddr,

    /// Base URL of the provider wrapper service.
    #[arg(long, env = "SPORTMONKS_SERVICE_URL", default_value = DEFAULT_SPORTMONKS_SERVICE_URL)]
    pub sportmonks_service_url: String,

    /// Base URL of the persistence service.
    #[arg(long, env = "DATABASE_SERVICE_URL", default_value = DEFAULT_DATABASE_SERVICE_URL)]
    pub database_service_url: String,

    #[command(flatten)]
    pub http: HttpClientArgs,
}
