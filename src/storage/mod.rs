//! Storage layer for the persistence service
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `schema`: Database connection and schema management
//! - `table`: Column mappings for each entity type
//! - `repository`: CRUD and bulk upsert operations

pub mod repository;
pub mod schema;
pub mod table;


// Re-export the main types for easy access
pub use repository::{EntityRepository, SqliteRepository};
pub use schema::Database;
pub use table::Table;
