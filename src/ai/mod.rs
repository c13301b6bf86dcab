//! Sentiment analysis and weekly summaries through a completion API.
//!
//! The [`SentimentAnalyzer`] and [`Summarizer`] traits are the seams the
//! rest of the crate depends on; [`OpenAiClient`] implements both.

mod client;
mod types;

use chrono::{DateTime, TimeZone};
use tracing::warn;

pub use client::{parse_sentiment, sentiment_request, summary_request, OpenAiClient};
pub use types::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, RetryPolicy,
    SentimentAnalysis, WeeklySummary,
};

use crate::config::AiConfig;
use crate::core::epoch_millis;
use crate::error::JournalError;
use crate::journal::{entries_since, JournalEntry, WEEK_MILLIS};
use crate::storage::{LocalStore, API_KEY_KEY};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PINKINK_OPENAI_API_KEY";

/// Reads the mood of a piece of text.
#[cfg_attr(test, mockall::automock)]
pub trait SentimentAnalyzer {
    /// Analyse `text`.
    ///
    /// # Errors
    ///
    /// Returns `ApiKeyMissing` without a key, or an API/parse error.
    fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis, JournalError>;
}

/// Turns formatted journal entries into a reflective summary.
#[cfg_attr(test, mockall::automock)]
pub trait Summarizer {
    /// Summarise `entries_text`.
    ///
    /// # Errors
    ///
    /// Returns `ApiKeyMissing` without a key, or an API error.
    fn summarize(&self, entries_text: &str) -> Result<String, JournalError>;
}

/// Analyse `text`, never failing: problems become a neutral reading.
pub fn analyze_or_neutral<A: SentimentAnalyzer + ?Sized>(analyzer: &A, text: &str) -> SentimentAnalysis {
    analyzer
        .analyze_sentiment(text)
        .unwrap_or_else(|e| neutral_fallback(&e))
}

/// The neutral reading shown in place of a failed analysis.
#[must_use]
pub fn neutral_fallback(error: &JournalError) -> SentimentAnalysis {
    match error {
        JournalError::ApiKeyMissing => SentimentAnalysis::neutral("API key not configured"),
        e => {
            warn!(error = %e, "sentiment analysis failed");
            SentimentAnalysis::neutral("Error occurred during analysis")
        }
    }
}

/// Format entries as `<date>: <content>` blocks separated by blank lines.
#[must_use]
pub fn format_entries(entries: &[JournalEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}", e.date, e.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summarise the entries written in the trailing seven days.
///
/// # Errors
///
/// Returns `NoEntries` when nothing was written this week, otherwise any
/// error from the summarizer.
pub fn generate_weekly_summary<S, Tz>(
    summarizer: &S,
    entries: &[JournalEntry],
    now: &DateTime<Tz>,
) -> Result<WeeklySummary, JournalError>
where
    S: Summarizer + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let week = entries_since(entries.to_vec(), epoch_millis(now) - WEEK_MILLIS);
    if week.is_empty() {
        return Err(JournalError::NoEntries(
            "No journal entries from the past week to summarize".to_string(),
        ));
    }

    let text = summarizer.summarize(&format_entries(&week))?;
    Ok(WeeklySummary {
        text,
        entry_count: week.len(),
        generated_at: now.to_rfc3339(),
    })
}

/// Resolve the API key: environment, then config file, then the local store.
///
/// # Errors
///
/// Returns an error if the local store cannot be read.
pub fn resolve_api_key(config: &AiConfig, store: &LocalStore) -> Result<Option<String>, JournalError> {
    let from_env = std::env::var(API_KEY_ENV).ok();
    resolve_api_key_from(from_env, config, store)
}

fn resolve_api_key_from(
    from_env: Option<String>,
    config: &AiConfig,
    store: &LocalStore,
) -> Result<Option<String>, JournalError> {
    let non_blank = |k: &String| !k.trim().is_empty();

    if let Some(key) = from_env.filter(non_blank) {
        return Ok(Some(key));
    }
    if let Some(key) = config.api_key.clone().filter(non_blank) {
        return Ok(Some(key));
    }
    Ok(store.get_item(API_KEY_KEY)?.filter(non_blank))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use mockall::predicate::{always, eq};

    use super::*;
    use crate::core::date_label;

    fn entry_days_ago(now: &DateTime<Local>, days: i64, content: &str) -> JournalEntry {
        let at = *now - Duration::days(days);
        JournalEntry::new(
            format!("e{days}"),
            date_label(at.date_naive()),
            content,
            at.timestamp_millis(),
        )
    }

    #[test]
    fn test_analyze_or_neutral_passes_result() {
        let mut analyzer = MockSentimentAnalyzer::new();
        analyzer
            .expect_analyze_sentiment()
            .with(eq("So thankful"))
            .times(1)
            .returning(|_| {
                Ok(SentimentAnalysis {
                    mood: "grateful".to_string(),
                    confidence: 0.8,
                    reason: "thanks".to_string(),
                })
            });

        assert_eq!(analyze_or_neutral(&analyzer, "So thankful").mood, "grateful");
    }

    #[test]
    fn test_analyze_or_neutral_without_key() {
        let mut analyzer = MockSentimentAnalyzer::new();
        analyzer
            .expect_analyze_sentiment()
            .returning(|_| Err(JournalError::ApiKeyMissing));

        let result = analyze_or_neutral(&analyzer, "text");
        assert_eq!(result, SentimentAnalysis::neutral("API key not configured"));
    }

    #[test]
    fn test_analyze_or_neutral_on_error() {
        let mut analyzer = MockSentimentAnalyzer::new();
        analyzer
            .expect_analyze_sentiment()
            .returning(|_| Err(JournalError::Api("500 Internal Server Error".to_string())));

        let result = analyze_or_neutral(&analyzer, "text");
        assert_eq!(result.mood, "neutral");
        assert!(result.confidence.abs() < f64::EPSILON);
        assert_eq!(result.reason, "Error occurred during analysis");
    }

    #[test]
    fn test_weekly_summary_formats_recent_entries() {
        let now = Local::now();
        let entries = vec![
            entry_days_ago(&now, 1, "Walked by the river"),
            entry_days_ago(&now, 10, "Too old"),
            entry_days_ago(&now, 0, "Finished the book"),
        ];
        let expected = format!(
            "{}: Walked by the river\n\n{}: Finished the book",
            entries[0].date, entries[2].date
        );

        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok("A gentle week.".to_string()));

        let summary = generate_weekly_summary(&summarizer, &entries, &now).unwrap();
        assert_eq!(summary.text, "A gentle week.");
        assert_eq!(summary.entry_count, 2);
    }

    #[test]
    fn test_weekly_summary_needs_entries() {
        let now = Local::now();
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_summarize().with(always()).never();

        let err = generate_weekly_summary(&summarizer, &[entry_days_ago(&now, 9, "old")], &now)
            .unwrap_err();
        assert!(matches!(err, JournalError::NoEntries(_)));
    }

    #[test]
    fn test_api_key_resolution_order() {
        let store = LocalStore::in_memory().unwrap();
        let mut config = AiConfig::default();

        assert_eq!(resolve_api_key_from(None, &config, &store).unwrap(), None);

        store.set_item(API_KEY_KEY, "sk-store").unwrap();
        assert_eq!(
            resolve_api_key_from(None, &config, &store).unwrap().as_deref(),
            Some("sk-store")
        );

        config.api_key = Some("sk-config".to_string());
        assert_eq!(
            resolve_api_key_from(Some(String::new()), &config, &store)
                .unwrap()
                .as_deref(),
            Some("sk-config")
        );

        assert_eq!(
            resolve_api_key_from(Some("sk-env".to_string()), &config, &store)
                .unwrap()
                .as_deref(),
            Some("sk-env")
        );
    }
}
