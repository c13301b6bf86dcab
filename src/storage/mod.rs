//! Storage layer for pinkink.
//!
//! SQLite-based persistence behind a small key/value interface:
//! - Journal entries
//! - Goals and milestones
//! - Prompt responses
//! - The completion API key

mod database;
mod local_store;
mod migrations;

pub use database::{Database, Location};
pub use local_store::{LocalStore, API_KEY_KEY, ENTRIES_KEY, GOALS_KEY, PROMPT_RESPONSES_KEY};
