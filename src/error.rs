//! Error types for pinkink.

use thiserror::Error;

/// Errors produced by the journal library.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or stream failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored or received data could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// User input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The completion API returned an error or an unusable reply.
    #[error("API error: {0}")]
    Api(String),

    /// No API key is available for the completion API.
    #[error("OpenAI API key not configured (set PINKINK_OPENAI_API_KEY or run `pinkink config set-key`)")]
    ApiKeyMissing,

    /// An operation needed entries and found none.
    #[error("No entries: {0}")]
    NoEntries(String),
}

impl From<serde_json::Error> for JournalError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for JournalError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_becomes_parse() {
        let err: JournalError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, JournalError::Parse(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            JournalError::NotFound("Goal '42'".to_string()).to_string(),
            "Not found: Goal '42'"
        );
        assert!(JournalError::ApiKeyMissing.to_string().contains("API key"));
    }
}
