//! Pull-then-upsert orchestration
//!
//! A sync run fetches the full collection of one entity kind from the
//! provider wrapper and forwards it, untouched, to the persistence service's
//! bulk upsert. There is no partial-success path: any failure in either hop
//! propagates and no [`SyncResult`] is produced.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::models::{BulkUpsertResult, EntityKind, SyncResult};

/// Where sync reads entity collections from.
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn fetch_all(&self, kind: EntityKind) -> Result<Vec<Value>>;
}

/// Where sync writes entity collections to.
#[async_trait]
pub trait BulkUpsertSink: Send + Sync {
    async fn bulk_upsert(&self, kind: EntityKind, records: &[Value]) -> Result<BulkUpsertResult>;
}

#[derive(Clone)]
pub struct SyncService {
    source: Arc<dyn EntitySource>,
    sink: Arc<dyn BulkUpsertSink>,
}

impl SyncService {
    pub fn new(source: Arc<dyn EntitySource>, sink: Arc<dyn BulkUpsertSink>) -> Self {
        Self { source, sink }
    }

    pub async fn sync(&self, kind: EntityKind) -> Result<SyncResult> {
        info!(entity = %kind, "sync started");

        let records = self.source.fetch_all(kind).await?;
        let counts = self.sink.bulk_upsert(kind, &records).await?;

        info!(
            entity = %kind,
            fetched = records.len(),
            created = counts.created,
            updated = counts.updated,
            "sync completed"
        );
        Ok(SyncResult::completed(kind, counts))
    }
}
