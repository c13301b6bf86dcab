//! `SQLite` database connection.
//!
//! The database lives at `~/.pinkink/pinkink.db`. Its only table today is
//! the key/value `local_store` that holds entries, goals, and prompt
//! responses as JSON documents.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;
use tracing::debug;

use crate::error::JournalError;

use super::migrations;

/// How long a write waits on another `pinkink` process holding the lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where a database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Memory,
}

/// A migrated connection to the pinkink database.
pub struct Database {
    conn: Connection,
    location: Location,
}

impl Database {
    /// Open (or create) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a migration fails.
    pub fn open_at(path: &Path) -> Result<Self, JournalError> {
        let conn = Connection::open(path).map_err(|e| {
            JournalError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Self::prepare(conn, Location::File(path.to_path_buf()))
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails.
    pub fn open_in_memory() -> Result<Self, JournalError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            JournalError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::prepare(conn, Location::Memory)
    }

    fn prepare(conn: Connection, location: Location) -> Result<Self, JournalError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        migrations::run(&conn)?;
        debug!(?location, "database ready");
        Ok(Self { conn, location })
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Schema version recorded in `PRAGMA user_version`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pragma cannot be read.
    pub fn schema_version(&self) -> Result<i32, JournalError> {
        migrations::get_version(&self.conn)
    }

    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
