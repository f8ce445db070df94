//! Database schema and connection management

use crate::error::{Result, ServiceError};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Shared SQLite connection for the persistence service.
///
/// Handlers lock the connection for the duration of one repository call, so
/// SQLite sees at most one open transaction at a time.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests and throwaway runs
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Default path of the database file
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| ServiceError::Config {
            message: "Could not determine data directory; set DB_PATH".to_string(),
        })?;
        Ok(data_dir.join("sportsync").join("sportsync.db"))
    }

    /// Borrow the connection for one unit of work
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| ServiceError::ConnectionPoisoned)
    }
}

/// Initialize the database schema
pub(crate) fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS leagues (
            id INTEGER PRIMARY KEY,
            sport_id INTEGER NOT NULL,
            country_id INTEGER,
            name TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            short_code TEXT,
            image_path TEXT,
            type TEXT,
            sub_type TEXT,
            last_played_at TEXT,
            category INTEGER,
            has_jerseys INTEGER
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY,
            sport_id INTEGER NOT NULL,
            country_id INTEGER,
            venue_id INTEGER,
            gender TEXT,
            name TEXT NOT NULL,
            short_code TEXT,
            image_path TEXT,
            founded INTEGER,
            type TEXT,
            placeholder INTEGER,
            last_played_at TEXT
        )",
        [],
    )?;

    Ok(())
}
