//! Key/value document store.
//!
//! Each key holds one JSON document (or a raw string), the way the web
//! version kept its state in browser local storage.

use std::rc::Rc;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::Database;
use crate::error::JournalError;

/// Storage key for the journal entry list.
pub const ENTRIES_KEY: &str = "journalEntries";
/// Storage key for the goal list.
pub const GOALS_KEY: &str = "userGoals";
/// Storage key for saved prompt responses.
pub const PROMPT_RESPONSES_KEY: &str = "promptResponses";
/// Storage key for the completion API key.
pub const API_KEY_KEY: &str = "openai-api-key";

/// A key/value store backed by the `local_store` table.
///
/// Cloning is cheap; clones share one connection.
#[derive(Clone)]
pub struct LocalStore {
    db: Rc<Database>,
}

impl LocalStore {
    /// Create a store over an existing database.
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        Self { db: Rc::new(db) }
    }

    /// Open a store over a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self, JournalError> {
        Ok(Self::with_database(Database::open_in_memory()?))
    }

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, JournalError> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| JournalError::Database(format!("Failed to read '{key}': {e}")))
    }

    /// Store a raw value under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), JournalError> {
        debug!(key, bytes = value.len(), "writing local store item");
        self.db
            .connection()
            .execute(
                r"INSERT INTO local_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| JournalError::Database(format!("Failed to write '{key}': {e}")))?;
        Ok(())
    }

    /// Remove `key`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove_item(&self, key: &str) -> Result<bool, JournalError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM local_store WHERE key = ?1", [key])
            .map_err(|e| JournalError::Database(format!("Failed to remove '{key}': {e}")))?;
        Ok(rows > 0)
    }

    /// Read and decode the JSON document under `key`.
    ///
    /// Returns `T::default()` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the document does not decode.
    pub fn get_json<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, JournalError> {
        match self.get_item(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| JournalError::Parse(format!("Corrupt '{key}' document: {e}"))),
            None => Ok(T::default()),
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), JournalError> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}
