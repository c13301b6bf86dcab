//! Text helpers.

/// Count whitespace-separated words.
///
/// Runs of whitespace count as one separator and leading or trailing
/// whitespace produces no empty words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive substring test.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
