//! Entry persistence capability.
//!
//! Anything that needs entries receives them through an [`EntryRepository`];
//! statistics code never reaches into storage itself.

use std::cell::RefCell;

use super::JournalEntry;
use crate::error::JournalError;
use crate::storage::{LocalStore, ENTRIES_KEY};

/// Load and save the full entry list.
pub trait EntryRepository {
    /// Load every stored entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self) -> Result<Vec<JournalEntry>, JournalError>;

    /// Replace the stored entries with `entries`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&self, entries: &[JournalEntry]) -> Result<(), JournalError>;
}

/// Entries kept as one JSON array in the [`LocalStore`].
#[derive(Clone)]
pub struct StoreEntryRepository {
    store: LocalStore,
}

impl StoreEntryRepository {
    #[must_use]
    pub const fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl EntryRepository for StoreEntryRepository {
    fn load(&self) -> Result<Vec<JournalEntry>, JournalError> {
        self.store.get_json(ENTRIES_KEY)
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<(), JournalError> {
        self.store.set_json(ENTRIES_KEY, entries)
    }
}

/// Entries held in memory. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    entries: RefCell<Vec<JournalEntry>>,
}

impl InMemoryEntryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl EntryRepository for InMemoryEntryRepository {
    fn load(&self) -> Result<Vec<JournalEntry>, JournalError> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<(), JournalError> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<JournalEntry> {
        vec![
            JournalEntry::new("1", "Sun Oct 18 2026", "first", 1),
            JournalEntry::new("2", "Mon Oct 19 2026", "second", 2).with_mood("happy"),
        ]
    }

    #[test]
    fn test_store_repository_round_trip() {
        let repo = StoreEntryRepository::new(LocalStore::in_memory().unwrap());
        assert!(repo.load().unwrap().is_empty());

        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_in_memory_repository_replaces() {
        let repo = InMemoryEntryRepository::with_entries(sample());
        repo.save(&sample()[..1]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1");
    }
}
