//! Provider wrapper routes: `GET /{entity}` and `GET /{entity}/{id}` per kind

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::debug;

use super::health::health_routes;
use crate::error::Result;
use crate::models::{Entity, League, Team};
use crate::sportmonks::UpstreamService;

#[derive(Clone)]
pub struct SportmonksState {
    pub upstream: UpstreamService,
}

impl SportmonksState {
    pub fn new(upstream: UpstreamService) -> Self {
        Self { upstream }
    }
}

pub fn sportmonks_router(state: SportmonksState) -> Router {
    Router::new()
        .merge(entity_routes::<League>())
        .merge(entity_routes::<Team>())
        .merge(health_routes::<SportmonksState>())
        .with_state(state)
}

fn entity_routes<E: Entity>() -> Router<SportmonksState> {
    let collection = format!("/{}", E::KIND);
    Router::new()
        .route(&collection, get(list::<E>))
        .route(&format!("{collection}/:id"), get(get_one::<E>))
}

async fn list<E: Entity>(State(state): State<SportmonksState>) -> Result<Json<Vec<E>>> {
    debug!(entity = %E::KIND, "proxy collection");
    Ok(Json(state.upstream.get_all::<E>(None).await?))
}

async fn get_one<E: Entity>(
    State(state): State<SportmonksState>,
    Path(id): Path<i64>,
) -> Result<Json<E>> {
    debug!(entity = %E::KIND, id, "proxy item");
    Ok(Json(state.upstream.get_by_id::<E>(id).await?))
}
