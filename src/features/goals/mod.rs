//! Goal tracking.
//!
//! Goals carry milestones whose completion drives progress, and are linked
//! to journal entries that mention them.

mod goal;
mod mentions;
mod storage;

pub use goal::{partition_goals, Goal, GoalCategory, Milestone, NewGoal};
pub use mentions::{analyze_mentions, mentions_goal};
pub use storage::GoalStorage;
