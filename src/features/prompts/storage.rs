//! Prompt response persistence.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{PromptCategory, WritingPrompt};
use crate::core::epoch_millis;
use crate::error::JournalError;
use crate::storage::{LocalStore, PROMPT_RESPONSES_KEY};

/// How many responses `recent` returns.
pub const RECENT_RESPONSES: usize = 3;

/// An answer to a writing prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    /// Epoch milliseconds at save time.
    pub id: i64,
    pub prompt_id: String,
    pub prompt: String,
    pub response: String,
    pub category: PromptCategory,
    pub timestamp: i64,
    /// UTC calendar day, `YYYY-MM-DD`.
    pub date: String,
}

/// Responses stored as one JSON array under `promptResponses`.
pub struct PromptStorage {
    store: LocalStore,
}

impl PromptStorage {
    #[must_use]
    pub const fn with_store(store: LocalStore) -> Self {
        Self { store }
    }

    /// All responses, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if stored responses cannot be read.
    pub fn list(&self) -> Result<Vec<PromptResponse>, JournalError> {
        self.store.get_json(PROMPT_RESPONSES_KEY)
    }

    /// Store a trimmed answer to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank answer, or a storage error.
    pub fn save_response<Tz: TimeZone>(
        &self,
        prompt: &WritingPrompt,
        text: &str,
        now: &DateTime<Tz>,
    ) -> Result<PromptResponse, JournalError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::InvalidInput(
                "Response cannot be empty".to_string(),
            ));
        }

        let millis = epoch_millis(now);
        let response = PromptResponse {
            id: millis,
            prompt_id: prompt.id.to_string(),
            prompt: prompt.prompt.to_string(),
            response: text.to_string(),
            category: prompt.category,
            timestamp: millis,
            date: now.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        };

        let mut responses = self.list()?;
        responses.push(response.clone());
        self.store.set_json(PROMPT_RESPONSES_KEY, &responses)?;

        info!(prompt = %response.prompt_id, "saved prompt response");
        Ok(response)
    }

    /// The last few responses, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if stored responses cannot be read.
    pub fn recent(&self) -> Result<Vec<PromptResponse>, JournalError> {
        let responses = self.list()?;
        Ok(responses.into_iter().rev().take(RECENT_RESPONSES).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};

    use super::*;
    use crate::features::prompts::find;

    fn storage() -> PromptStorage {
        PromptStorage::with_store(LocalStore::in_memory().unwrap())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 7, 0, 0).unwrap()
    }

    #[test]
    fn test_save_response_trims() {
        let storage = storage();
        let prompt = find("5").unwrap();

        let saved = storage
            .save_response(prompt, "  The lake at dawn.  ", &now())
            .unwrap();
        assert_eq!(saved.response, "The lake at dawn.");
        assert_eq!(saved.prompt_id, "5");
        assert_eq!(saved.category, PromptCategory::Mindfulness);
        assert_eq!(saved.date, "2026-10-19");
        assert_eq!(storage.list().unwrap(), vec![saved]);
    }

    #[test]
    fn test_save_response_rejects_blank() {
        let storage = storage();
        let err = storage
            .save_response(find("1").unwrap(), " \n ", &now())
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidInput(_)));
    }

    #[test]
    fn test_date_is_utc() {
        let storage = storage();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let early_morning = tokyo.with_ymd_and_hms(2026, 10, 20, 5, 0, 0).unwrap();

        let saved = storage
            .save_response(find("1").unwrap(), "text", &early_morning)
            .unwrap();
        assert_eq!(saved.date, "2026-10-19");
    }

    #[test]
    fn test_recent_newest_first() {
        let storage = storage();
        let prompt = find("2").unwrap();
        for i in 0..5 {
            let at = now() + Duration::minutes(i);
            storage.save_response(prompt, &format!("answer {i}"), &at).unwrap();
        }

        let recent: Vec<String> = storage
            .recent()
            .unwrap()
            .into_iter()
            .map(|r| r.response)
            .collect();
        assert_eq!(recent, ["answer 4", "answer 3", "answer 2"]);
    }
}
