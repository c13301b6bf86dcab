//! Journal entries and their persistence.
//!
//! - `entry`: the entry record and the mood palette
//! - `repository`: the load/save capability and its implementations
//! - `service`: day-keyed journal operations

mod entry;
mod repository;
mod service;

pub use entry::{JournalEntry, Mood};
pub use repository::{EntryRepository, InMemoryEntryRepository, StoreEntryRepository};
pub use service::{entries_since, Journal, WEEK_MILLIS};
