//! Orchestrator routes: `POST /sync/leagues` and `POST /sync/teams`

use axum::{extract::State, routing::post, Json, Router};

use super::health::health_routes;
use crate::error::Result;
use crate::models::{EntityKind, SyncResult};
use crate::sync::SyncService;

#[derive(Clone)]
pub struct OrchestratorState {
    pub sync: SyncService,
}

impl OrchestratorState {
    pub fn new(sync: SyncService) -> Self {
        Self { sync }
    }
}

pub fn orchestrator_router(state: OrchestratorState) -> Router {
    Router::new()
        .route("/sync/leagues", post(sync_leagues))
        .route("/sync/teams", post(sync_teams))
        .merge(health_routes::<OrchestratorState>())
        .with_state(state)
}

async fn sync_leagues(State(state): State<OrchestratorState>) -> Result<Json<SyncResult>> {
    Ok(Json(state.sync.sync(EntityKind::Leagues).await?))
}

async fn sync_teams(State(state): State<OrchestratorState>) -> Result<Json<SyncResult>> {
    Ok(Json(state.sync.sync(EntityKind::Teams).await?))
}
