//! Statistics command implementation.
//!
//! Handles the writing dashboard and the monthly mood calendar.

use chrono::{Local, NaiveDate};
use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::OutputFormat;
use crate::error::JournalError;
use crate::features::stats::{
    compute_writing_stats_at, mood_for_date, render_bar_chart, render_mood_calendar,
    render_progress_bar, render_sparkline, render_summary_box, streak_badge, top_mood,
    words_per_day, MoodCalendar, WritingStats, WEEKLY_GOAL,
};
use crate::journal::{JournalEntry, Mood};
use crate::output::{mood_badge, to_json};

/// Execute stats command.
///
/// # Errors
///
/// Returns an error if the entries cannot be read or formatted.
pub fn stats(ctx: &Context, format: OutputFormat) -> Result<String, JournalError> {
    let now = Local::now();
    let entries = ctx.journal().entries()?;
    let stats = compute_writing_stats_at(&entries, &now);

    match format {
        OutputFormat::Json => to_json(&stats),
        OutputFormat::Pretty => {
            let span = ctx.config.stats.sparkline_span();
            let words = words_per_day(&entries, now.date_naive(), span);
            Ok(render_dashboard(&stats, &words))
        }
    }
}

fn render_dashboard(stats: &WritingStats, words: &[usize]) -> String {
    let mut output = Vec::new();

    let streak = format!(
        "{} {} {}",
        stats.current_streak,
        if stats.current_streak == 1 { "day" } else { "days" },
        streak_badge(stats.current_streak)
    );
    output.push(render_summary_box(
        "✍️  WRITING STATS",
        &[
            ("Current streak", streak),
            ("Longest streak", format!("{} days", stats.longest_streak)),
            ("Total entries", stats.total_entries.to_string()),
            ("Total words", stats.total_words.to_string()),
            ("Avg words/entry", stats.average_words_per_entry.to_string()),
        ],
    ));
    output.push(String::new());

    output.push("🎯 WEEKLY GOAL".bold().to_string());
    output.push("─".repeat(50));
    output.push(format!("  {WEEKLY_GOAL} entries a week"));
    output.push(format!("  {}", render_progress_bar(stats.weekly_goal_progress, 30)));
    output.push(String::new());

    output.push(format!("📈 WORDS, LAST {} DAYS", words.len()).bold().to_string());
    output.push("─".repeat(50));
    output.push(format!("  {}", render_sparkline(words).cyan()));
    output.push(format!(
        "  {}",
        format!("total {}", words.iter().sum::<usize>()).dimmed()
    ));

    output.join("\n")
}

/// Execute calendar command.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed month, or an error if the
/// entries cannot be read or formatted.
pub fn calendar(
    ctx: &Context,
    month: Option<&str>,
    format: OutputFormat,
) -> Result<String, JournalError> {
    let today = Local::now().date_naive();
    let calendar = match month {
        Some(m) => parse_month(m)?,
        None => MoodCalendar::containing(today),
    };
    let entries = ctx.journal().entries()?;

    match format {
        OutputFormat::Json => calendar_json(calendar, &entries),
        OutputFormat::Pretty => Ok(calendar_pretty(calendar, &entries, today)),
    }
}

/// Parse `YYYY-MM` into a calendar month.
fn parse_month(input: &str) -> Result<MoodCalendar, JournalError> {
    let invalid = || JournalError::InvalidInput(format!("Invalid month '{input}' (expected YYYY-MM)"));

    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    MoodCalendar::new(year, month).ok_or_else(invalid)
}

fn calendar_json(calendar: MoodCalendar, entries: &[JournalEntry]) -> Result<String, JournalError> {
    let days: Vec<_> = calendar
        .days()
        .into_iter()
        .flatten()
        .map(|date| {
            json!({
                "date": date.to_string(),
                "mood": mood_for_date(entries, date)
            })
        })
        .collect();
    let stats = calendar.month_stats(entries);

    to_json(&json!({
        "month": month_key(calendar),
        "title": calendar.title(),
        "days": days,
        "stats": stats,
        "topMood": top_mood(&stats)
    }))
}

fn month_key(calendar: MoodCalendar) -> String {
    format!("{:04}-{:02}", calendar.year(), calendar.month())
}

/// Navigation line pointing at the neighbouring months.
fn month_hint(calendar: MoodCalendar) -> String {
    format!(
        "  ‹ --month {}    --month {} ›",
        month_key(calendar.previous()),
        month_key(calendar.next())
    )
}

fn calendar_pretty(
    calendar: MoodCalendar,
    entries: &[JournalEntry],
    today: NaiveDate,
) -> String {
    let mut output = vec![
        render_mood_calendar(calendar, entries, today),
        month_hint(calendar).dimmed().to_string(),
        String::new(),
    ];

    let stats = calendar.month_stats(entries);
    if stats.is_empty() {
        output.push("  No moods recorded this month".dimmed().to_string());
        return output.join("\n");
    }

    output.push("😊 MOOD BREAKDOWN".bold().to_string());
    output.push("─".repeat(50));
    let data: Vec<(String, usize)> = stats
        .iter()
        .map(|s| (mood_badge(&s.mood), s.count))
        .collect();
    output.push(render_bar_chart(&data, 16, 20));

    if let Some(top) = top_mood(&stats) {
        let label = top
            .mood
            .parse::<Mood>()
            .map_or_else(|_| top.mood.clone(), |m| m.label().to_string());
        output.push(format!(
            "\n  Most frequent: {} {}",
            label.bold(),
            format!("({} days)", top.count).dimmed()
        ));
    }

    let recorded: usize = stats.iter().map(|s| s.count).sum();
    output.push(format!(
        "  {}",
        format!("{recorded} of {} days have a mood", calendar.day_count()).dimmed()
    ));

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        let cal = parse_month("2026-02").unwrap();
        assert_eq!(cal.year(), 2026);
        assert_eq!(cal.month(), 2);
        assert_eq!(cal.day_count(), 28);
    }

    #[test]
    fn test_parse_month_rejects_garbage() {
        for bad in ["2026", "2026-13", "oct-2026", "2026-00", ""] {
            assert!(
                matches!(parse_month(bad), Err(JournalError::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_month_hint_wraps_years() {
        let hint = month_hint(MoodCalendar::new(2027, 1).unwrap());
        assert!(hint.contains("--month 2026-12"));
        assert!(hint.contains("--month 2027-02"));
    }

    #[test]
    fn test_render_dashboard() {
        colored::control::set_override(false);
        let stats = WritingStats {
            current_streak: 3,
            longest_streak: 5,
            total_entries: 9,
            total_words: 900,
            average_words_per_entry: 100,
            weekly_goal_progress: 43,
        };
        let out = render_dashboard(&stats, &[0, 10, 20]);

        assert!(out.contains("3 days"));
        assert!(out.contains("7 entries a week"));
        assert!(out.contains("43%"));
        assert!(out.contains("WORDS, LAST 3 DAYS"));
        assert!(out.contains("total 30"));
    }
}
