//! HTTP surfaces of the three services
//!
//! - `database`: CRUD and bulk upsert over the local store
//! - `sportmonks`: read-only proxy over the external provider
//! - `orchestrator`: sync triggers
//! - `health`: liveness route shared by all three
//! - `extract`: JSON body extractor with structured validation errors

pub mod database;
pub mod extract;
pub mod health;
pub mod orchestrator;
pub mod sportmonks;

pub use database::{database_router, DatabaseState};
pub use orchestrator::{orchestrator_router, OrchestratorState};
pub use sportmonks::{sportmonks_router, SportmonksState};
