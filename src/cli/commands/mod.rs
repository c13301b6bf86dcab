//! Command implementations for pinkink.
//!
//! Each command takes the shared [`Context`] and an output format and
//! returns the text to print.

mod ai;
mod completions;
mod config;
mod goals;
mod journal;
mod prompts;
mod stats;
mod transfer;

pub use ai::{analyze, summary};
pub use completions::completions;
pub use config::config;
pub use goals::goal;
pub use journal::{list, recent, today, write};
pub use prompts::prompt;
pub use stats::{calendar, stats};
pub use transfer::{export, import};

use std::io::Read;

use tracing::debug;

use crate::ai::{resolve_api_key, OpenAiClient};
use crate::config::{Config, Paths};
use crate::error::JournalError;
use crate::features::goals::GoalStorage;
use crate::features::prompts::PromptStorage;
use crate::journal::{Journal, StoreEntryRepository};
use crate::storage::{Database, LocalStore};

/// Everything a command needs: configuration, file locations, and the store.
pub struct Context {
    pub config: Config,
    pub paths: Paths,
    pub store: LocalStore,
}

impl Context {
    /// Open the database under `paths`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the database cannot be created.
    pub fn open(config: Config, paths: Paths) -> Result<Self, JournalError> {
        paths.ensure_dirs()?;
        let db = Database::open_at(&paths.database)?;
        debug!(location = ?db.location(), "opened journal store");
        let store = LocalStore::with_database(db);
        Ok(Self {
            config,
            paths,
            store,
        })
    }

    /// Build a context over an existing store (useful for testing).
    #[must_use]
    pub const fn with_store(config: Config, paths: Paths, store: LocalStore) -> Self {
        Self {
            config,
            paths,
            store,
        }
    }

    #[must_use]
    pub fn journal(&self) -> Journal<StoreEntryRepository> {
        Journal::new(StoreEntryRepository::new(self.store.clone()))
    }

    #[must_use]
    pub fn goals(&self) -> GoalStorage {
        GoalStorage::with_store(self.store.clone())
    }

    #[must_use]
    pub fn prompts(&self) -> PromptStorage {
        PromptStorage::with_store(self.store.clone())
    }

    /// A completion client with whatever key can be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the HTTP client
    /// cannot be built.
    pub fn ai_client(&self) -> Result<OpenAiClient, JournalError> {
        let key = resolve_api_key(&self.config.ai, &self.store)?;
        OpenAiClient::new(&self.config.ai, key)
    }
}

/// Join positional words, or read all of stdin when there are none.
/// Trailing whitespace from stdin is dropped.
fn text_or_stdin(words: &[String]) -> Result<String, JournalError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end().to_string())
}
