//! Entity types shared by the provider wrapper, the persistence service and the orchestrator.

pub mod league;
pub mod sync;
pub mod team;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

pub use league::League;
pub use sync::{BulkUpsertResult, SyncResult, SYNC_STATUS_COMPLETED};
pub use team::Team;

/// The two entity collections kept in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Leagues,
    Teams,
}

impl EntityKind {
    /// Plural collection name, used for URL segments, table names and sync results.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Leagues => "leagues",
            EntityKind::Teams => "teams",
        }
    }

    /// Singular name for messages.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Leagues => "League",
            EntityKind::Teams => "Team",
        }
    }

    /// Resource path on the external provider, relative to its base URL.
    pub fn upstream_path(self) -> &'static str {
        match self {
            EntityKind::Leagues => "football/leagues",
            EntityKind::Teams => "football/teams",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record keyed by a provider-assigned integer id.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> i64;
}
