//! Journal entry and mood types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::word_count;
use crate::error::JournalError;

/// One journal record for a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique identifier (`<label>-<millis>` for entries written here).
    pub id: String,
    /// Calendar-day label, e.g. `Mon Oct 19 2026`.
    pub date: String,
    /// Free-text body.
    pub content: String,
    /// Epoch milliseconds when the entry was saved.
    pub timestamp: i64,
    /// Mood chosen by the writer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Mood assigned by sentiment analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_mood: Option<String>,
}

impl JournalEntry {
    /// Create an entry with no mood.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            content: content.into(),
            timestamp,
            mood: None,
            ai_mood: None,
        }
    }

    /// Builder-style mood setter.
    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// The mood to display: the analysed mood wins over the chosen one.
    #[must_use]
    pub fn display_mood(&self) -> Option<&str> {
        self.ai_mood
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.mood.as_deref().filter(|m| !m.is_empty()))
    }

    /// Number of words in the body.
    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }
}

/// The moods a writer can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Peaceful,
    Frustrated,
    Thoughtful,
    Tired,
    Excited,
    Anxious,
    Grateful,
    Neutral,
}

impl Mood {
    /// Every mood, in picker order.
    pub const ALL: [Self; 10] = [
        Self::Happy,
        Self::Sad,
        Self::Peaceful,
        Self::Frustrated,
        Self::Thoughtful,
        Self::Tired,
        Self::Excited,
        Self::Anxious,
        Self::Grateful,
        Self::Neutral,
    ];

    /// Lowercase storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Peaceful => "peaceful",
            Self::Frustrated => "frustrated",
            Self::Thoughtful => "thoughtful",
            Self::Tired => "tired",
            Self::Excited => "excited",
            Self::Anxious => "anxious",
            Self::Grateful => "grateful",
            Self::Neutral => "neutral",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Peaceful => "Peaceful",
            Self::Frustrated => "Frustrated",
            Self::Thoughtful => "Thoughtful",
            Self::Tired => "Tired",
            Self::Excited => "Excited",
            Self::Anxious => "Anxious",
            Self::Grateful => "Grateful",
            Self::Neutral => "Neutral",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😔",
            Self::Peaceful => "😌",
            Self::Frustrated => "😤",
            Self::Thoughtful => "🤔",
            Self::Tired => "😴",
            Self::Excited => "🥳",
            Self::Anxious => "😰",
            Self::Grateful => "💝",
            Self::Neutral => "😐",
        }
    }

    /// Emoji for a stored mood string, if it names a known mood.
    #[must_use]
    pub fn emoji_for(value: &str) -> Option<&'static str> {
        value.parse::<Self>().ok().map(Self::emoji)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|m| m.as_str()).collect();
                JournalError::InvalidInput(format!(
                    "Unknown mood '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}
