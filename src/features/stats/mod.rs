//! Writing statistics and the mood calendar.
//!
//! - Streaks, word totals and weekly goal progress
//! - Monthly mood grid and mood counts
//! - Terminal charts

pub mod mood;
pub mod visualization;
pub mod writing;

pub use mood::{mood_for_date, top_mood, MoodCalendar, MoodCount};
pub use visualization::{
    render_bar_chart, render_mood_calendar, render_progress_bar, render_sparkline,
    render_summary_box,
};
pub use writing::{
    compute_writing_stats, compute_writing_stats_at, streak_badge, words_per_day, WritingStats,
    WEEKLY_GOAL,
};
