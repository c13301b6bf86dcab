//! AI-assisted commands: mood analysis and the weekly reflection.

use chrono::Local;
use serde_json::json;
use tracing::info;

use super::journal::analyze_and_store;
use super::Context;
use crate::ai::{analyze_or_neutral, generate_weekly_summary};
use crate::cli::args::OutputFormat;
use crate::error::JournalError;
use crate::output::{format_sentiment_pretty, format_summary_pretty, to_json};

/// Execute analyze command.
///
/// Free text is analysed and shown. Without text, today's entry is
/// analysed and the detected mood is stored on it.
///
/// # Errors
///
/// Returns `NoEntries` when there is no text and no entry today, or a
/// storage error.
pub fn analyze(ctx: &Context, text: &[String], format: OutputFormat) -> Result<String, JournalError> {
    let client = ctx.ai_client()?;

    let (analysis, date) = if text.is_empty() {
        let journal = ctx.journal();
        let mut entry = journal.today_entry(&Local::now())?.ok_or_else(|| {
            JournalError::NoEntries("Nothing written today to analyse".to_string())
        })?;
        let analysis = analyze_and_store(&journal, &client, &mut entry)?;
        (analysis, Some(entry.date))
    } else {
        (analyze_or_neutral(&client, &text.join(" ")), None)
    };

    match format {
        OutputFormat::Json => to_json(&json!({
            "date": date,
            "analysis": analysis
        })),
        OutputFormat::Pretty => {
            let mut output = String::new();
            if let Some(date) = &date {
                output.push_str(&format!("Today's entry ({date})\n"));
            }
            output.push_str(&format_sentiment_pretty(&analysis));
            Ok(output)
        }
    }
}

/// Execute summary command.
///
/// # Errors
///
/// Returns `ApiKeyMissing` without a key, `NoEntries` when nothing was
/// written this week, or an API error.
pub fn summary(ctx: &Context, format: OutputFormat) -> Result<String, JournalError> {
    let client = ctx.ai_client()?;
    if !client.has_api_key() {
        return Err(JournalError::ApiKeyMissing);
    }

    let now = Local::now();
    let journal = ctx.journal();
    let summary = generate_weekly_summary(&client, &journal.entries()?, &now)?;
    info!(entries = summary.entry_count, "generated weekly summary");

    match format {
        OutputFormat::Json => to_json(&summary),
        OutputFormat::Pretty => {
            let mut week = journal.weekly_entries(&now)?;
            week.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            Ok(format_summary_pretty(&summary, &week))
        }
    }
}
