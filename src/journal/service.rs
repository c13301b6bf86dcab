//! Journal operations on top of an [`EntryRepository`].

use chrono::{DateTime, Local};
use tracing::{debug, info};

use super::{EntryRepository, JournalEntry};
use crate::core::{epoch_millis, today_label, DAY_MILLIS};
use crate::error::JournalError;

/// Length of the trailing window used for weekly views.
pub const WEEK_MILLIS: i64 = 7 * DAY_MILLIS;

/// The journal: one entry per calendar day.
pub struct Journal<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> Journal<R> {
    #[must_use]
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repo
    }

    /// All entries in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn entries(&self) -> Result<Vec<JournalEntry>, JournalError> {
        self.repo.load()
    }

    /// Save `content` as today's entry, replacing any entry already written today.
    ///
    /// When `mood` is `None` the mood of the replaced entry is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank content, or a storage error.
    pub fn save_today(
        &self,
        content: &str,
        mood: Option<&str>,
        now: &DateTime<Local>,
    ) -> Result<JournalEntry, JournalError> {
        if content.trim().is_empty() {
            return Err(JournalError::InvalidInput(
                "Entry content cannot be empty".to_string(),
            ));
        }

        let today = today_label(now);
        let millis = epoch_millis(now);
        let mut entries = self.repo.load()?;

        let previous = entries.iter().find(|e| e.date == today).cloned();
        entries.retain(|e| e.date != today);

        let mut entry = JournalEntry::new(format!("{today}-{millis}"), today, content, millis);
        entry.mood = mood
            .map(str::to_string)
            .or_else(|| previous.as_ref().and_then(|p| p.mood.clone()));

        entries.push(entry.clone());
        self.repo.save(&entries)?;

        info!(
            date = %entry.date,
            words = entry.word_count(),
            replaced = previous.is_some(),
            "saved journal entry"
        );
        Ok(entry)
    }

    /// The entry written today, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn today_entry(&self, now: &DateTime<Local>) -> Result<Option<JournalEntry>, JournalError> {
        let today = today_label(now);
        Ok(self.repo.load()?.into_iter().find(|e| e.date == today))
    }

    /// The `limit` most recent entries, then with today's entry removed.
    ///
    /// Today's entry is dropped after the limit is applied, so fewer than
    /// `limit` entries come back when today has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn recent_entries(
        &self,
        limit: usize,
        now: &DateTime<Local>,
    ) -> Result<Vec<JournalEntry>, JournalError> {
        let today = today_label(now);
        let mut entries = self.repo.load()?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(entries
            .into_iter()
            .take(limit)
            .filter(|e| e.date != today)
            .collect())
    }

    /// Entries timestamped within the trailing seven days.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn weekly_entries(&self, now: &DateTime<Local>) -> Result<Vec<JournalEntry>, JournalError> {
        Ok(entries_since(self.repo.load()?, epoch_millis(now) - WEEK_MILLIS))
    }

    /// Record a sentiment-derived mood on the entry for `date`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no entry has that label.
    pub fn set_ai_mood(&self, date: &str, mood: &str) -> Result<(), JournalError> {
        let mut entries = self.repo.load()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.date == date)
            .ok_or_else(|| JournalError::NotFound(format!("Entry for {date}")))?;

        entry.ai_mood = Some(mood.to_string());
        debug!(date, mood, "stored analysed mood");
        self.repo.save(&entries)
    }

    /// Merge `incoming` into storage by id. Returns how many ids were new.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read or written.
    pub fn import(&self, incoming: Vec<JournalEntry>) -> Result<usize, JournalError> {
        let mut entries = self.repo.load()?;
        let mut added = 0;

        for entry in incoming {
            if let Some(slot) = entries.iter_mut().find(|e| e.id == entry.id) {
                *slot = entry;
            } else {
                added += 1;
                entries.push(entry);
            }
        }

        self.repo.save(&entries)?;
        info!(added, total = entries.len(), "imported entries");
        Ok(added)
    }
}

/// Entries with `timestamp >= cutoff_millis`, in input order.
#[must_use]
pub fn entries_since(entries: Vec<JournalEntry>, cutoff_millis: i64) -> Vec<JournalEntry> {
    entries
        .into_iter()
        .filter(|e| e.timestamp >= cutoff_millis)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::core::date_label;
    use crate::journal::InMemoryEntryRepository;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap()
    }

    fn entry_days_ago(days: i64, content: &str) -> JournalEntry {
        let at = now() - Duration::days(days);
        JournalEntry::new(
            format!("e{days}"),
            date_label(at.date_naive()),
            content,
            at.timestamp_millis(),
        )
    }

    fn journal(entries: Vec<JournalEntry>) -> Journal<InMemoryEntryRepository> {
        Journal::new(InMemoryEntryRepository::with_entries(entries))
    }

    #[test]
    fn test_save_today_rejects_blank() {
        let journal = journal(vec![]);
        let err = journal.save_today("  \n", None, &now()).unwrap_err();
        assert!(matches!(err, JournalError::InvalidInput(_)));
        assert!(journal.entries().unwrap().is_empty());
    }

    #[test]
    fn test_save_today_replaces_same_day() {
        let journal = journal(vec![entry_days_ago(1, "yesterday")]);

        journal.save_today("first draft", Some("tired"), &now()).unwrap();
        let later = now() + Duration::minutes(5);
        let saved = journal.save_today("second draft", None, &later).unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(saved.content, "second draft");
        assert_eq!(saved.mood.as_deref(), Some("tired"));
        assert_eq!(saved.date, "Mon Oct 19 2026");
        assert_eq!(saved.id, format!("Mon Oct 19 2026-{}", later.timestamp_millis()));
    }

    #[test]
    fn test_today_entry() {
        let journal = journal(vec![entry_days_ago(0, "today"), entry_days_ago(2, "older")]);
        let today = journal.today_entry(&now()).unwrap().unwrap();
        assert_eq!(today.content, "today");

        let empty = self::journal(vec![entry_days_ago(2, "older")]);
        assert!(empty.today_entry(&now()).unwrap().is_none());
    }

    #[test]
    fn test_recent_entries_limit_then_drop_today() {
        let journal = journal(vec![
            entry_days_ago(3, "three"),
            entry_days_ago(0, "zero"),
            entry_days_ago(1, "one"),
            entry_days_ago(2, "two"),
        ]);

        let recent = journal.recent_entries(3, &now()).unwrap();
        let contents: Vec<&str> = recent.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn test_weekly_entries_window() {
        let journal = journal(vec![
            entry_days_ago(0, "in"),
            entry_days_ago(6, "in"),
            entry_days_ago(8, "out"),
        ]);

        let weekly = journal.weekly_entries(&now()).unwrap();
        assert_eq!(weekly.len(), 2);
        assert!(weekly.iter().all(|e| e.content == "in"));
    }

    #[test]
    fn test_set_ai_mood() {
        let journal = journal(vec![entry_days_ago(0, "great day")]);
        journal.set_ai_mood("Mon Oct 19 2026", "happy").unwrap();

        let entry = journal.today_entry(&now()).unwrap().unwrap();
        assert_eq!(entry.ai_mood.as_deref(), Some("happy"));

        let err = journal.set_ai_mood("Tue Oct 20 2026", "sad").unwrap_err();
        assert!(matches!(err, JournalError::NotFound(_)));
    }

    #[test]
    fn test_import_merges_by_id() {
        let journal = journal(vec![entry_days_ago(1, "old text")]);

        let mut updated = entry_days_ago(1, "new text");
        updated.mood = Some("grateful".to_string());
        let added = journal
            .import(vec![updated, entry_days_ago(4, "fresh")])
            .unwrap();

        assert_eq!(added, 1);
        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "new text");
    }

    #[test]
    fn test_import_collapses_repeated_ids_in_one_batch() {
        let journal = journal(Vec::new());

        let first = entry_days_ago(2, "first");
        let mut second = first.clone();
        second.content = "second".to_string();
        let added = journal.import(vec![first, second]).unwrap();

        assert_eq!(added, 1);
        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "second");
    }
}
