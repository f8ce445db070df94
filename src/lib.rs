//! SportMonks football data sync
//!
//! Three small HTTP services share this library:
//!
//! - **Provider wrapper** (`sportsync sportmonks`): proxies league and team
//!   lookups to the SportMonks API, attaching the access token and unwrapping
//!   the `{data: ...}` envelope.
//! - **Persistence service** (`sportsync database`): CRUD and bulk upsert of
//!   leagues and teams over a SQLite store.
//! - **Orchestrator** (`sportsync orchestrator`): pulls a full collection from
//!   the wrapper and pushes it into the persistence service's bulk upsert.
//!
//! ## Bulk upsert
//!
//! Records are keyed by the provider-assigned `id`. A batch runs in one
//! transaction: each record is inserted when its id is unseen and fully
//! overwritten otherwise, and the returned counts say which happened how
//! often. A repeated id within one batch counts as a create followed by an
//! update.
//!
//! ```rust
//! use sportsync::models::{BulkUpsertResult, League};
//! use sportsync::storage::{Database, EntityRepository, SqliteRepository};
//!
//! # fn example() -> sportsync::Result<()> {
//! let db = Database::open_in_memory()?;
//! let conn = db.connection()?;
//! let leagues = SqliteRepository::<League>::new(&conn);
//!
//! let counts = leagues.bulk_upsert(&[League::new(271, 1, "Superliga")])?;
//! assert_eq!(counts, BulkUpsertResult::new(1, 0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Settings are read from flags or environment variables, and a `.env` file
//! is loaded first when present:
//! ```bash
//! export API_KEY=your-sportmonks-token
//! export DB_PATH=/var/lib/sportsync/sportsync.db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod peers;
pub mod service;
pub mod sportmonks;
pub mod storage;
pub mod sync;

// Re-export commonly used types
pub use error::{Result, ServiceError};
pub use models::{BulkUpsertResult, Entity, EntityKind, League, SyncResult, Team};
