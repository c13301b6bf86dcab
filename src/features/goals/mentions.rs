//! Find journal entries that talk about a goal.

use super::Goal;
use crate::journal::JournalEntry;

/// Description words this short or shorter never count as a mention.
const MIN_KEYWORD_CHARS: usize = 3;

/// Whether `content` mentions `goal`: the title appears anywhere, or any
/// description word longer than three characters does. Case-insensitive.
#[must_use]
pub fn mentions_goal(goal: &Goal, content: &str) -> bool {
    let content = content.to_lowercase();
    let title = goal.title.to_lowercase();

    if !title.is_empty() && content.contains(&title) {
        return true;
    }

    goal.description
        .to_lowercase()
        .split(' ')
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .any(|word| content.contains(word))
}

/// Recount mentions of every goal across `entries`.
///
/// `mention_count` is replaced; `last_mentioned` becomes the date of the
/// last mentioning entry in input order and is left alone when none match.
/// Returns the total number of mentions found.
pub fn analyze_mentions(goals: &mut [Goal], entries: &[JournalEntry]) -> usize {
    let mut total = 0;

    for goal in goals.iter_mut() {
        let mentioning: Vec<&JournalEntry> = entries
            .iter()
            .filter(|e| mentions_goal(goal, &e.content))
            .collect();

        goal.mention_count = mentioning.len();
        if let Some(last) = mentioning.last() {
            goal.last_mentioned = Some(last.date.clone());
        }
        total += mentioning.len();
    }

    total
}
