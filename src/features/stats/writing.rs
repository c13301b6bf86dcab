//! Writing-habit statistics.
//!
//! A pure transformation from journal entries to a [`WritingStats`]
//! snapshot. Nothing here touches storage; callers hand the entries in.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::core::{epoch_millis, parse_label, today_label, yesterday_label, word_count, DAY_MILLIS};
use crate::journal::JournalEntry;

/// Entries per week that count as meeting the weekly goal.
pub const WEEKLY_GOAL: usize = 7;

/// Snapshot of writing statistics, recomputed on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStats {
    /// Consecutive days with an entry, ending today or yesterday.
    pub current_streak: usize,
    /// Longest run of consecutive days anywhere in the history.
    pub longest_streak: usize,
    pub total_entries: usize,
    pub total_words: usize,
    pub average_words_per_entry: usize,
    /// Percentage of the weekly goal met in the trailing seven days, capped at 100.
    pub weekly_goal_progress: u8,
}

/// Compute statistics against the local clock.
#[must_use]
pub fn compute_writing_stats(entries: &[JournalEntry]) -> WritingStats {
    compute_writing_stats_at(entries, &Local::now())
}

/// Compute statistics as of `now`.
#[must_use]
pub fn compute_writing_stats_at<Tz: TimeZone>(
    entries: &[JournalEntry],
    now: &DateTime<Tz>,
) -> WritingStats {
    if entries.is_empty() {
        return WritingStats::default();
    }

    let dates = distinct_dates(entries);

    let today = today_label(now);
    let yesterday = yesterday_label(now);
    let has_recent = entries
        .iter()
        .any(|e| e.date == today || e.date == yesterday);

    let current_streak = if has_recent {
        current_streak(&dates, now.date_naive())
    } else {
        0
    };

    let total_entries = entries.len();
    let total_words: usize = entries.iter().map(JournalEntry::word_count).sum();

    WritingStats {
        current_streak,
        longest_streak: longest_streak(&dates),
        total_entries,
        total_words,
        average_words_per_entry: rounded_ratio(total_words, total_entries),
        weekly_goal_progress: weekly_goal_progress(entries, epoch_millis(now)),
    }
}

/// Badge shown next to a streak length.
#[must_use]
pub const fn streak_badge(streak: usize) -> &'static str {
    match streak {
        30.. => "🏆",
        14.. => "🔥",
        7.. => "⭐",
        3.. => "✨",
        _ => "📝",
    }
}

/// Words written on each of the last `days` calendar days, oldest first.
///
/// Entries are bucketed by their date label; unparseable labels are skipped.
/// The series is cut short at the earliest representable date.
#[must_use]
pub fn words_per_day(entries: &[JournalEntry], today: NaiveDate, days: usize) -> Vec<usize> {
    let mut series: Vec<usize> = (0..days)
        .map_while(|back| {
            let back = i64::try_from(back).ok()?;
            today.checked_sub_signed(Duration::try_days(back)?)
        })
        .map(|day| {
            entries
                .iter()
                .filter(|e| parse_label(&e.date) == Some(day))
                .map(|e| word_count(&e.content))
                .sum()
        })
        .collect();
    series.reverse();
    series
}

/// Distinct parseable entry dates, newest first.
fn distinct_dates(entries: &[JournalEntry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries.iter().filter_map(|e| parse_label(&e.date)).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    dates
}

/// Walk back from `today`. The newest date may be today or yesterday;
/// each following date must be exactly one day before the previous one.
fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> usize {
    let mut cursor = today;
    let mut streak = 0;

    for date in dates.iter().filter(|d| **d <= today) {
        let diff = (cursor - *date).num_days();
        let allowed = if streak == 0 { diff <= 1 } else { diff == 0 };
        if !allowed {
            break;
        }
        streak += 1;
        cursor = *date - Duration::days(1);
    }

    streak
}

fn longest_streak(dates: &[NaiveDate]) -> usize {
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn weekly_goal_progress(entries: &[JournalEntry], now_millis: i64) -> u8 {
    let cutoff = now_millis - 7 * DAY_MILLIS;
    let count = entries.iter().filter(|e| e.timestamp >= cutoff).count();
    rounded_ratio(count * 100, WEEKLY_GOAL).min(100) as u8
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn rounded_ratio(numerator: usize, denominator: usize) -> usize {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::core::date_label;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 18, 30, 0).unwrap()
    }

    fn entry_days_ago(days: i64, content: &str) -> JournalEntry {
        let at = now() - Duration::days(days);
        JournalEntry::new(
            format!("id-{days}"),
            date_label(at.date_naive()),
            content,
            at.timestamp_millis(),
        )
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(compute_writing_stats_at(&[], &now()), WritingStats::default());
    }

    #[test]
    fn test_single_entry_today() {
        let stats = compute_writing_stats_at(&[entry_days_ago(0, "hello")], &now());
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        let entries: Vec<_> = (0..5).map(|d| entry_days_ago(d, "words")).collect();
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.current_streak, 5);
        assert_eq!(stats.longest_streak, 5);
    }

    #[test]
    fn test_gap_breaks_streak() {
        let entries = vec![entry_days_ago(0, "a"), entry_days_ago(2, "b")];
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_old_entry_only() {
        let stats = compute_writing_stats_at(&[entry_days_ago(8, "a")], &now());
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_streak_from_yesterday_counts() {
        let entries: Vec<_> = (1..4).map(|d| entry_days_ago(d, "a")).collect();
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn test_longest_independent_of_current() {
        let mut entries: Vec<_> = (10..16).map(|d| entry_days_ago(d, "a")).collect();
        entries.push(entry_days_ago(0, "b"));
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 6);
    }

    #[test]
    fn test_duplicate_dates_count_once() {
        let mut second = entry_days_ago(0, "again");
        second.id = "other".to_string();
        let entries = vec![entry_days_ago(0, "first"), second, entry_days_ago(1, "x")];
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.total_entries, 3);
    }

    #[test]
    fn test_unparseable_labels_are_skipped() {
        let mut odd = entry_days_ago(1, "x");
        odd.date = "sometime".to_string();
        let entries = vec![entry_days_ago(0, "a"), odd];
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_word_totals() {
        let entries: Vec<_> = (0..10)
            .map(|d| entry_days_ago(d, "one two  three\nfour five"))
            .collect();
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.total_words, 50);
        assert_eq!(stats.average_words_per_entry, 5);
    }

    #[test]
    fn test_average_rounds() {
        let entries = vec![entry_days_ago(0, "a b"), entry_days_ago(1, "a b c")];
        let stats = compute_writing_stats_at(&entries, &now());
        assert_eq!(stats.average_words_per_entry, 3);
    }

    #[test]
    fn test_weekly_progress_capped() {
        let entries: Vec<_> = (0..10)
            .map(|i| {
                let mut e = entry_days_ago(i % 5, "a");
                e.id = format!("n{i}");
                e
            })
            .collect();
        assert_eq!(compute_writing_stats_at(&entries, &now()).weekly_goal_progress, 100);
    }

    #[test]
    fn test_weekly_progress_partial() {
        let entries = vec![
            entry_days_ago(0, "a"),
            entry_days_ago(3, "b"),
            entry_days_ago(6, "c"),
            entry_days_ago(9, "old"),
        ];
        assert_eq!(compute_writing_stats_at(&entries, &now()).weekly_goal_progress, 43);
    }

    #[test]
    fn test_idempotent() {
        let entries: Vec<_> = (0..4).map(|d| entry_days_ago(d * 2, "a b c")).collect();
        assert_eq!(
            compute_writing_stats_at(&entries, &now()),
            compute_writing_stats_at(&entries, &now())
        );
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = compute_writing_stats_at(&[entry_days_ago(0, "hi")], &now());
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["currentStreak"], 1);
        assert_eq!(json["averageWordsPerEntry"], 1);
        assert_eq!(json["weeklyGoalProgress"], 14);
    }

    #[test]
    fn test_streak_badge() {
        assert_eq!(streak_badge(0), "📝");
        assert_eq!(streak_badge(3), "✨");
        assert_eq!(streak_badge(7), "⭐");
        assert_eq!(streak_badge(14), "🔥");
        assert_eq!(streak_badge(45), "🏆");
    }

    #[test]
    fn test_words_per_day() {
        let entries = vec![entry_days_ago(0, "a b"), entry_days_ago(2, "c d e")];
        let counts = words_per_day(&entries, now().date_naive(), 4);
        assert_eq!(counts, vec![0, 3, 0, 2]);
    }

    #[test]
    fn test_words_per_day_stops_at_earliest_date() {
        let counts = words_per_day(&[], NaiveDate::MIN + Duration::days(2), 10);
        assert_eq!(counts, vec![0, 0, 0]);
    }
}
