//! Terminal visualization for statistics.
//!
//! Provides ASCII charts and the mood calendar grid.

use chrono::{Datelike, NaiveDate};

use super::mood::{mood_for_date, MoodCalendar};
use crate::journal::{JournalEntry, Mood};

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart.
///
/// # Arguments
///
/// * `data` - (label, value) pairs
/// * `max_label_width` - Labels are padded or truncated to this width
/// * `bar_width` - Width of the bar portion
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn render_bar_chart(data: &[(String, usize)], max_label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let label = fit_label(label, max_label_width);
        let bar_length = (*value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width.saturating_sub(bar_length));

        lines.push(format!("{label} |{bar}{padding} {value}"));
    }

    lines.join("\n")
}

fn fit_label(label: &str, width: usize) -> String {
    let chars = label.chars().count();
    if chars > width && width > 3 {
        let kept: String = label.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        let pad = width.saturating_sub(chars);
        format!("{label}{}", " ".repeat(pad))
    }
}

/// Render a sparkline (compact inline chart).
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn render_sparkline(values: &[usize]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render a progress bar for a percentage in `0..=100`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn render_progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100);
    let filled = (f64::from(percent) / 100.0 * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!(
        "[{}{}] {percent}%",
        FULL_BLOCK.to_string().repeat(filled),
        "░".repeat(empty)
    )
}

/// Render a summary box with key metrics.
#[must_use]
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let width_of = |s: &str| s.chars().count();
    let max_label_len = items.iter().map(|(l, _)| width_of(l)).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| width_of(v)).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3; // " : "
    let box_width = content_width.max(width_of(title)) + 4;

    let mut lines = Vec::new();
    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - width_of(title)) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - width_of(title))
    ));
    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item = format!("{label:>max_label_len$} : {value}");
        let padding = box_width.saturating_sub(width_of(&item) + 2);
        lines.push(format!("│ {item}{} │", " ".repeat(padding)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));
    lines.join("\n")
}

/// Render a month grid, Sunday first. Days with a known mood show its emoji,
/// other days show the day number; `today` is marked with `*`.
#[must_use]
pub fn render_mood_calendar(
    calendar: MoodCalendar,
    entries: &[JournalEntry],
    today: NaiveDate,
) -> String {
    let mut lines = vec![
        format!("{:^28}", calendar.title()),
        " Su  Mo  Tu  We  Th  Fr  Sa ".to_string(),
    ];

    for week in calendar.days().chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| cell.map_or_else(|| "    ".to_string(), |d| day_cell(d, entries, today)))
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

fn day_cell(date: NaiveDate, entries: &[JournalEntry], today: NaiveDate) -> String {
    let marker = if date == today { '*' } else { ' ' };
    match mood_for_date(entries, date).and_then(Mood::emoji_for) {
        // Emoji render two columns wide.
        Some(emoji) => format!(" {emoji}{marker}"),
        None => format!("{:>3}{marker}", date.day()),
    }
}
