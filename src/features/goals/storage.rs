//! Goal persistence.
//!
//! Goals live as one JSON array under the `userGoals` key of the local store.

use chrono::{DateTime, Local};
use tracing::info;

use super::{analyze_mentions, Goal, Milestone, NewGoal};
use crate::error::JournalError;
use crate::journal::JournalEntry;
use crate::storage::{LocalStore, GOALS_KEY};

/// Storage and operations for goals.
pub struct GoalStorage {
    store: LocalStore,
}

impl GoalStorage {
    /// Create storage over an existing store.
    #[must_use]
    pub const fn with_store(store: LocalStore) -> Self {
        Self { store }
    }

    /// Load all goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored goals cannot be read.
    pub fn list(&self) -> Result<Vec<Goal>, JournalError> {
        self.store.get_json(GOALS_KEY)
    }

    fn save_all(&self, goals: &[Goal]) -> Result<(), JournalError> {
        self.store.set_json(GOALS_KEY, goals)
    }

    /// Create and store a goal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title, or a storage error.
    pub fn add(&self, new: NewGoal, now: &DateTime<Local>) -> Result<Goal, JournalError> {
        let goal = Goal::create(new, now)?;
        let mut goals = self.list()?;
        goals.push(goal.clone());
        self.save_all(&goals)?;

        info!(id = %goal.id, title = %goal.title, "added goal");
        Ok(goal)
    }

    /// Flip a milestone. Returns the updated goal and milestone.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown goal or milestone.
    pub fn toggle_milestone(
        &self,
        goal_id: &str,
        milestone_id: &str,
        now: &DateTime<Local>,
    ) -> Result<(Goal, Milestone), JournalError> {
        let mut goals = self.list()?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| JournalError::NotFound(format!("Goal '{goal_id}'")))?;

        let milestone = goal.toggle_milestone(milestone_id, now)?.clone();
        let goal = goal.clone();
        self.save_all(&goals)?;

        info!(
            goal = %goal.id,
            milestone = %milestone.id,
            progress = goal.progress,
            "toggled milestone"
        );
        Ok((goal, milestone))
    }

    /// Delete a goal. Returns the removed goal.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no goal has that id.
    pub fn delete(&self, goal_id: &str) -> Result<Goal, JournalError> {
        let mut goals = self.list()?;
        let index = goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| JournalError::NotFound(format!("Goal '{goal_id}'")))?;

        let removed = goals.remove(index);
        self.save_all(&goals)?;

        info!(id = %removed.id, "deleted goal");
        Ok(removed)
    }

    /// Recount entry mentions for every goal and store the result.
    ///
    /// # Errors
    ///
    /// Returns an error if goals cannot be read or written.
    pub fn analyze(&self, entries: &[JournalEntry]) -> Result<Vec<Goal>, JournalError> {
        let mut goals = self.list()?;
        let total = analyze_mentions(&mut goals, entries);
        self.save_all(&goals)?;

        info!(goals = goals.len(), mentions = total, "analysed goal mentions");
        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn storage() -> GoalStorage {
        GoalStorage::with_store(LocalStore::in_memory().unwrap())
    }

    fn at(minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 9, minute, 0).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let storage = storage();
        assert!(storage.list().unwrap().is_empty());

        storage.add(NewGoal::new("Sleep by 11"), &at(0)).unwrap();
        storage.add(NewGoal::new("Call grandma"), &at(1)).unwrap();

        let goals = storage.list().unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[1].title, "Call grandma");
    }

    #[test]
    fn test_toggle_persists() {
        let storage = storage();
        let goal = storage
            .add(NewGoal::new("Read").with_milestone("Buy a book"), &at(0))
            .unwrap();
        let milestone_id = goal.milestones[0].id.clone();

        let (updated, milestone) = storage
            .toggle_milestone(&goal.id, &milestone_id, &at(5))
            .unwrap();
        assert!(milestone.completed);
        assert!(updated.completed);
        assert_eq!(storage.list().unwrap()[0].progress, 100);

        let err = storage.toggle_milestone("missing", &milestone_id, &at(6)).unwrap_err();
        assert!(matches!(err, JournalError::NotFound(_)));
    }

    #[test]
    fn test_delete() {
        let storage = storage();
        let goal = storage.add(NewGoal::new("Stretch"), &at(0)).unwrap();

        assert_eq!(storage.delete(&goal.id).unwrap().title, "Stretch");
        assert!(storage.list().unwrap().is_empty());
        assert!(matches!(
            storage.delete(&goal.id).unwrap_err(),
            JournalError::NotFound(_)
        ));
    }

    #[test]
    fn test_analyze_persists_counts() {
        let storage = storage();
        storage.add(NewGoal::new("Yoga"), &at(0)).unwrap();

        let entries = vec![JournalEntry::new("1", "Mon Oct 19 2026", "Morning yoga class", 0)];
        let goals = storage.analyze(&entries).unwrap();

        assert_eq!(goals[0].mention_count, 1);
        assert_eq!(storage.list().unwrap()[0].mention_count, 1);
    }
}
