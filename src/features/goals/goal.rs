//! Goal and milestone types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::core::{epoch_millis, local_midnight_millis, DAY_MILLIS};
use crate::error::JournalError;

/// What area of life a goal belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Personal,
    Health,
    Career,
    Learning,
    Relationships,
}

impl GoalCategory {
    pub const ALL: [Self; 5] = [
        Self::Personal,
        Self::Health,
        Self::Career,
        Self::Learning,
        Self::Relationships,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Career => "career",
            Self::Learning => "learning",
            Self::Relationships => "relationships",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Personal => "🌱",
            Self::Health => "💪",
            Self::Career => "💼",
            Self::Learning => "📚",
            Self::Relationships => "❤️",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| {
                JournalError::InvalidInput(format!(
                    "Unknown category '{s}' (expected personal, health, career, learning or relationships)"
                ))
            })
    }
}

/// A step toward a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// A tracked goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: GoalCategory,
    /// `YYYY-MM-DD`, or empty when no target is set.
    #[serde(default)]
    pub target_date: String,
    /// Percentage of milestones completed.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub mention_count: usize,
    /// Date label of the last entry that mentioned this goal.
    #[serde(default)]
    pub last_mentioned: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub completed: bool,
}

/// Input for creating a goal.
#[derive(Debug, Clone, Default)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub target_date: Option<NaiveDate>,
    pub milestones: Vec<String>,
}

impl NewGoal {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_milestone(mut self, title: impl Into<String>) -> Self {
        self.milestones.push(title.into());
        self
    }
}

impl Goal {
    /// Build a goal created at `now`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the title is blank.
    pub fn create<Tz: TimeZone>(new: NewGoal, now: &DateTime<Tz>) -> Result<Self, JournalError>
    where
        Tz::Offset: fmt::Display,
    {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(JournalError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            ));
        }

        let id = epoch_millis(now).to_string();
        let milestones = new
            .milestones
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .enumerate()
            .map(|(index, m)| Milestone {
                id: format!("{id}-{index}"),
                title: m.to_string(),
                completed: false,
                completed_at: None,
            })
            .collect();

        Ok(Self {
            id,
            title: title.to_string(),
            description: new.description.trim().to_string(),
            category: new.category,
            target_date: new
                .target_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            progress: 0,
            milestones,
            mention_count: 0,
            last_mentioned: None,
            created_at: now.to_rfc3339(),
            completed: false,
        })
    }

    /// Flip a milestone and recompute progress.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the goal has no such milestone.
    pub fn toggle_milestone<Tz: TimeZone>(
        &mut self,
        milestone_id: &str,
        now: &DateTime<Tz>,
    ) -> Result<&Milestone, JournalError>
    where
        Tz::Offset: fmt::Display,
    {
        let index = self
            .milestones
            .iter()
            .position(|m| m.id == milestone_id)
            .ok_or_else(|| JournalError::NotFound(format!("Milestone '{milestone_id}'")))?;

        let milestone = &mut self.milestones[index];
        milestone.completed = !milestone.completed;
        milestone.completed_at = milestone.completed.then(|| now.to_rfc3339());

        self.recompute_progress();
        Ok(&self.milestones[index])
    }

    /// `progress = round(done / total * 100)`; a goal is complete at 100.
    pub fn recompute_progress(&mut self) {
        let total = self.milestones.len();
        if total == 0 {
            return;
        }
        let done = self.milestones.iter().filter(|m| m.completed).count();
        let percent = (done * 200 + total) / (total * 2);
        self.progress = u8::try_from(percent).unwrap_or(100);
        self.completed = self.progress == 100;
    }

    /// Parsed target date, if set.
    #[must_use]
    pub fn target(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.target_date, "%Y-%m-%d").ok()
    }

    /// Whole days until the target's local midnight, rounded up. Negative when overdue.
    #[must_use]
    pub fn days_until_target<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<i64> {
        let target = self.target()?;
        let diff = local_midnight_millis(target) - epoch_millis(now);
        let days = diff.div_euclid(DAY_MILLIS);
        Some(if diff.rem_euclid(DAY_MILLIS) > 0 { days + 1 } else { days })
    }
}

/// Split goals into (active, completed), keeping order.
#[must_use]
pub fn partition_goals(goals: &[Goal]) -> (Vec<&Goal>, Vec<&Goal>) {
    goals.iter().partition(|g| !g.completed)
}
