//! Import and export of journal entries as JSON.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::error::JournalError;
use crate::journal::JournalEntry;
use crate::output::to_json;

/// Execute import command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an entry array.
pub fn import(ctx: &Context, file: &Path, format: OutputFormat) -> Result<String, JournalError> {
    let contents = std::fs::read_to_string(file)?;
    let incoming = parse_entries(&contents)?;
    let received = incoming.len();

    let journal = ctx.journal();
    let added = journal.import(incoming)?;
    let total = journal.entries()?.len();

    match format {
        OutputFormat::Json => to_json(&json!({
            "received": received,
            "added": added,
            "total": total
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {added} new of {received} entries ({total} total)",
            "Imported".green().bold()
        )),
    }
}

fn parse_entries(contents: &str) -> Result<Vec<JournalEntry>, JournalError> {
    serde_json::from_str(contents)
        .map_err(|e| JournalError::Parse(format!("Expected a JSON array of entries: {e}")))
}

/// Execute export command. Without a file the JSON is returned for printing.
///
/// # Errors
///
/// Returns an error if the entries cannot be read or the file written.
pub fn export(ctx: &Context, file: Option<&Path>, format: OutputFormat) -> Result<String, JournalError> {
    let mut entries = ctx.journal().entries()?;
    entries.sort_by_key(|e| e.timestamp);
    let body = to_json(&entries)?;

    let Some(path) = file else {
        return Ok(body);
    };

    std::fs::write(path, body)?;
    match format {
        OutputFormat::Json => to_json(&json!({
            "exported": entries.len(),
            "path": path.display().to_string()
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} entries to {}",
            "Exported".green().bold(),
            entries.len(),
            path.display()
        )),
    }
}
