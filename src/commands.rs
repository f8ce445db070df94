//! Service entry points: build state from configuration and serve a router.

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::{
    api::{
        database_router, orchestrator_router, sportmonks_router, DatabaseState,
        OrchestratorState, SportmonksState,
    },
    config::{DatabaseServiceConfig, OrchestratorConfig, SportmonksConfig},
    peers::{DatabaseServiceClient, SportmonksServiceClient},
    sportmonks::{SportmonksClient, UpstreamService},
    storage::Database,
    sync::SyncService,
    Result,
};

/// Run the persistence service until shutdown.
pub async fn handle_database_service(config: DatabaseServiceConfig) -> Result<()> {
    let path = config.resolve_db_path()?;
    info!(path = %path.display(), "opening database");
    let db = Database::open(&path)?;

    serve("database", config.bind, database_router(DatabaseState::new(db))).await
}

/// Run the provider wrapper until shutdown.
pub async fn handle_sportmonks_service(config: SportmonksConfig) -> Result<()> {
    if config.api_key.is_empty() {
        warn!("API_KEY is empty; the provider will reject requests");
    }

    let client = SportmonksClient::new(
        config.http.build_client()?,
        &config.base_url,
        &config.api_key,
        config.http.retry_policy(),
    );
    let state = SportmonksState::new(UpstreamService::new(client));

    serve("sportmonks", config.bind, sportmonks_router(state)).await
}

/// Run the orchestrator until shutdown.
pub async fn handle_orchestrator_service(config: OrchestratorConfig) -> Result<()> {
    let http = config.http.build_client()?;
    let retry = config.http.retry_policy();

    let source = SportmonksServiceClient::new(http.clone(), &config.sportmonks_service_url, retry);
    let sink = DatabaseServiceClient::new(http, &config.database_service_url, retry);
    let state = OrchestratorState::new(SyncService::new(Arc::new(source), Arc::new(sink)));

    serve("orchestrator", config.bind, orchestrator_router(state)).await
}

async fn serve(service: &'static str, addr: SocketAddr, router: Router) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(service, %addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(service, "shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
