//! JSON output formatting for pinkink.

use serde::Serialize;
use serde_json::json;

use crate::error::JournalError;
use crate::features::goals::{partition_goals, Goal};
use crate::journal::JournalEntry;

/// Format entries as JSON
///
/// # Errors
///
/// Returns `JournalError::Parse` if JSON serialization fails.
pub fn format_entries_json(entries: &[JournalEntry], list_name: &str) -> Result<String, JournalError> {
    let output = json!({
        "list": list_name,
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format goals as JSON, split into active and completed
///
/// # Errors
///
/// Returns `JournalError::Parse` if JSON serialization fails.
pub fn format_goals_json(goals: &[Goal]) -> Result<String, JournalError> {
    let (active, completed) = partition_goals(goals);
    let output = json!({
        "count": goals.len(),
        "active": active,
        "completed": completed
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `JournalError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JournalError> {
    Ok(serde_json::to_string_pretty(value)?)
}
