//! Tracing subscriber setup for the service binaries.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ServiceError};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global subscriber; fails if one is already installed.
pub fn init_logging(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|err| ServiceError::Config {
        message: format!("failed to initialise logging: {err}"),
    })
}
