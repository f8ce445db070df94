//! Persistence service routes
//!
//! Every entity kind gets the same route set, built from one generic
//! definition:
//!
//! | Method & path            | Success | Failure |
//! |--------------------------|---------|---------|
//! | `GET /{entity}`          | 200     |         |
//! | `GET /{entity}/{id}`     | 200     | 404     |
//! | `POST /{entity}`         | 201     | 409     |
//! | `POST /{entity}/bulk`    | 200     |         |
//! | `DELETE /{entity}/{id}`  | 204     | 404     |
//!
//! Bulk bodies are not size-capped. SQLite work runs on the blocking pool so
//! a long transaction never parks a runtime worker.

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::task;
use tracing::debug;

use super::{extract::Payload, health::health_routes};
use crate::error::Result;
use crate::models::{BulkUpsertResult, League, Team};
use crate::service::EntityService;
use crate::storage::{Database, SqliteRepository, Table};

/// Shared state for persistence routes.
#[derive(Clone)]
pub struct DatabaseState {
    pub db: Arc<Database>,
}

impl DatabaseState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}

/// Router with league, team and health routes.
pub fn database_router(state: DatabaseState) -> Router {
    Router::new()
        .merge(entity_routes::<League>())
        .merge(entity_routes::<Team>())
        .merge(health_routes::<DatabaseState>())
        .with_state(state)
}

fn entity_routes<T: Table>() -> Router<DatabaseState> {
    let collection = format!("/{}", T::KIND);
    Router::new()
        .route(&collection, get(list::<T>).post(create::<T>))
        .route(
            &format!("{collection}/bulk"),
            post(bulk_upsert::<T>).layer(DefaultBodyLimit::disable()),
        )
        .route(&format!("{collection}/:id"), get(get_one::<T>).delete(delete::<T>))
}

/// Run one unit of storage work on the blocking pool.
///
/// The connection lock is taken inside the blocking task, so waiting for it
/// never holds up the async runtime.
async fn with_service<T, R, F>(state: &DatabaseState, work: F) -> Result<R>
where
    T: Table,
    R: Send + 'static,
    F: FnOnce(&EntityService<T, SqliteRepository<'_, T>>) -> Result<R> + Send + 'static,
{
    let db = Arc::clone(&state.db);
    task::spawn_blocking(move || {
        let conn = db.connection()?;
        let service = EntityService::new(SqliteRepository::<T>::new(&conn));
        work(&service)
    })
    .await?
}

async fn list<T: Table>(State(state): State<DatabaseState>) -> Result<Json<Vec<T>>> {
    let entities = with_service::<T, _, _>(&state, |service| service.get_all()).await?;
    Ok(Json(entities))
}

async fn get_one<T: Table>(
    State(state): State<DatabaseState>,
    Path(id): Path<i64>,
) -> Result<Json<T>> {
    let entity = with_service::<T, _, _>(&state, move |service| service.get_by_id(id)).await?;
    Ok(Json(entity))
}

async fn create<T: Table>(
    State(state): State<DatabaseState>,
    Payload(entity): Payload<T>,
) -> Result<(StatusCode, Json<T>)> {
    debug!(entity = %T::KIND, id = entity.id(), "create");
    let stored = with_service::<T, _, _>(&state, move |service| service.create(&entity)).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn bulk_upsert<T: Table>(
    State(state): State<DatabaseState>,
    Payload(entities): Payload<Vec<T>>,
) -> Result<Json<BulkUpsertResult>> {
    debug!(entity = %T::KIND, count = entities.len(), "bulk upsert");
    let counts = with_service::<T, _, _>(&state, move |service| {
        service.bulk_upsert(&entities)
    })
    .await?;
    Ok(Json(counts))
}

async fn delete<T: Table>(
    State(state): State<DatabaseState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    debug!(entity = %T::KIND, id, "delete");
    with_service::<T, _, _>(&state, move |service| service.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
