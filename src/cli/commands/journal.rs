//! Daily entry commands: write, today, recent, list.

use chrono::Local;
use colored::Colorize;
use serde_json::json;
use tracing::{debug, info};

use super::{text_or_stdin, Context};
use crate::ai::{neutral_fallback, SentimentAnalysis, SentimentAnalyzer};
use crate::cli::args::{OutputFormat, WriteArgs};
use crate::error::JournalError;
use crate::journal::{EntryRepository, Journal, JournalEntry, Mood};
use crate::output::{format_entries, format_entry, format_entry_pretty, format_sentiment_pretty, to_json};

/// Execute write command
///
/// # Errors
///
/// Returns `InvalidInput` for a blank entry, or a storage error.
pub fn write(ctx: &Context, args: WriteArgs, format: OutputFormat) -> Result<String, JournalError> {
    let content = text_or_stdin(&args.text)?;
    let now = Local::now();
    let journal = ctx.journal();

    let mut entry = journal.save_today(&content, args.mood.map(Mood::as_str), &now)?;

    let analysis = if args.analyze || ctx.config.journal.auto_analyze {
        let client = ctx.ai_client()?;
        Some(analyze_and_store(&journal, &client, &mut entry)?)
    } else {
        None
    };

    match format {
        OutputFormat::Json => to_json(&json!({
            "entry": entry,
            "analysis": analysis
        })),
        OutputFormat::Pretty => {
            let mut output = format!("{} {}\n\n", "Saved".green().bold(), "today's entry".bold());
            output.push_str(&format_entry_pretty(&entry));
            if let Some(analysis) = &analysis {
                output.push('\n');
                output.push_str(&format_sentiment_pretty(analysis));
            }
            Ok(output)
        }
    }
}

/// Analyse `entry` and record the detected mood on success. Failures fall
/// back to a neutral reading that is shown but never stored.
pub(super) fn analyze_and_store<R, A>(
    journal: &Journal<R>,
    analyzer: &A,
    entry: &mut JournalEntry,
) -> Result<SentimentAnalysis, JournalError>
where
    R: EntryRepository,
    A: SentimentAnalyzer + ?Sized,
{
    match analyzer.analyze_sentiment(&entry.content) {
        Ok(analysis) => {
            journal.set_ai_mood(&entry.date, &analysis.mood)?;
            entry.ai_mood = Some(analysis.mood.clone());
            info!(date = %entry.date, mood = %analysis.mood, "stored detected mood");
            Ok(analysis)
        }
        Err(e) => Ok(neutral_fallback(&e)),
    }
}

/// Execute today command
///
/// # Errors
///
/// Returns an error if the entries cannot be read or formatted.
pub fn today(ctx: &Context, format: OutputFormat) -> Result<String, JournalError> {
    match ctx.journal().today_entry(&Local::now())? {
        Some(entry) => format_entry(&entry, format),
        None => match format {
            OutputFormat::Json => Ok("null".to_string()),
            OutputFormat::Pretty => Ok(format!(
                "No entry yet today. Start one with {}",
                "pinkink write".bold()
            )),
        },
    }
}

/// Execute recent command
///
/// # Errors
///
/// Returns an error if the entries cannot be read or formatted.
pub fn recent(ctx: &Context, limit: Option<usize>, format: OutputFormat) -> Result<String, JournalError> {
    let limit = limit.unwrap_or(ctx.config.journal.recent_limit);
    debug!(limit, "listing recent entries");
    let entries = ctx.journal().recent_entries(limit, &Local::now())?;
    format_entries(&entries, "Recent", format)
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the entries cannot be read or formatted.
pub fn list(ctx: &Context, format: OutputFormat) -> Result<String, JournalError> {
    let mut entries = ctx.journal().entries()?;
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    format_entries(&entries, "All entries", format)
}
