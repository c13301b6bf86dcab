//! Schema migrations, tracked in `PRAGMA user_version`.
//!
//! `MIGRATIONS[n]` upgrades the schema from version `n` to `n + 1`. Pending
//! steps run in one transaction when the database is opened.

use rusqlite::Connection;
use tracing::info;

use crate::error::JournalError;

const MIGRATIONS: &[&str] = &[
    // v1: key/value documents under the names the web version used
    // (`journalEntries`, `userGoals`, `promptResponses`, `openai-api-key`).
    r"
    CREATE TABLE IF NOT EXISTS local_store (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    ",
];

fn latest() -> i32 {
    i32::try_from(MIGRATIONS.len()).unwrap_or(i32::MAX)
}

/// Schema version of `conn`; 0 for a fresh database.
///
/// # Errors
///
/// Returns an error if the pragma cannot be read.
pub fn get_version(conn: &Connection) -> Result<i32, JournalError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| JournalError::Database(format!("Failed to read schema version: {e}")))
}

/// Apply every pending migration.
///
/// # Errors
///
/// Returns an error if the database is newer than this build, or a step
/// fails (in which case nothing is applied).
pub fn run(conn: &Connection) -> Result<(), JournalError> {
    let current = get_version(conn)?;
    let target = latest();

    if current > target {
        return Err(JournalError::Database(format!(
            "Database schema v{current} is newer than this pinkink (v{target})"
        )));
    }
    if current == target {
        return Ok(());
    }

    let pending = usize::try_from(current).unwrap_or(0);
    let mut batch = String::from("BEGIN;");
    for (index, sql) in MIGRATIONS.iter().enumerate().skip(pending) {
        info!(version = index + 1, "applying database migration");
        batch.push_str(sql);
    }
    batch.push_str(&format!("PRAGMA user_version = {target}; COMMIT;"));

    conn.execute_batch(&batch).map_err(|e| {
        let _ = conn.execute_batch("ROLLBACK;");
        JournalError::Database(format!("Migration to v{target} failed: {e}"))
    })
}
