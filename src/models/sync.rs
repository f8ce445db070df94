//! Results reported by bulk upsert and sync operations.

use serde::{Deserialize, Serialize};

use super::EntityKind;

pub const SYNC_STATUS_COMPLETED: &str = "completed";

/// Counts returned by `POST /{entity}/bulk`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpsertResult {
    pub created: usize,
    pub updated: usize,
}

impl BulkUpsertResult {
    pub fn new(created: usize, updated: usize) -> Self {
        Self { created, updated }
    }
}

/// Summary of one orchestrated sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    pub entity: String,
    pub created: usize,
    pub updated: usize,
    pub status: String,
}

impl SyncResult {
    pub fn completed(kind: EntityKind, counts: BulkUpsertResult) -> Self {
        Self {
            entity: kind.as_str().to_string(),
            created: counts.created,
            updated: counts.updated,
            status: SYNC_STATUS_COMPLETED.to_string(),
        }
    }
}
