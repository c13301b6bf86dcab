//! Output formatting for pinkink.
//!
//! This module provides formatters for displaying journal data in various formats.

mod json;
mod pretty;

use chrono::{DateTime, Local};

use crate::cli::args::OutputFormat;
use crate::error::JournalError;
use crate::features::goals::Goal;
use crate::journal::JournalEntry;

pub use json::*;
pub use pretty::*;

/// Format entries based on output format
///
/// # Errors
///
/// Returns `JournalError::Parse` if JSON serialization fails.
pub fn format_entries(
    entries: &[JournalEntry],
    title: &str,
    format: OutputFormat,
) -> Result<String, JournalError> {
    match format {
        OutputFormat::Pretty => Ok(format_entries_pretty(entries, title)),
        OutputFormat::Json => format_entries_json(entries, title),
    }
}

/// Format a single entry based on output format
///
/// # Errors
///
/// Returns `JournalError::Parse` if JSON serialization fails.
pub fn format_entry(entry: &JournalEntry, format: OutputFormat) -> Result<String, JournalError> {
    match format {
        OutputFormat::Pretty => Ok(format_entry_pretty(entry)),
        OutputFormat::Json => to_json(entry),
    }
}

/// Format goals based on output format
///
/// # Errors
///
/// Returns `JournalError::Parse` if JSON serialization fails.
pub fn format_goals(
    goals: &[Goal],
    now: &DateTime<Local>,
    format: OutputFormat,
) -> Result<String, JournalError> {
    match format {
        OutputFormat::Pretty => Ok(format_goals_pretty(goals, now)),
        OutputFormat::Json => format_goals_json(goals),
    }
}
