use chrono::{DateTime, Local};
use colored::Colorize;

use crate::ai::{SentimentAnalysis, WeeklySummary};
use crate::features::goals::{partition_goals, Goal};
use crate::features::prompts::{PromptResponse, WritingPrompt};
use crate::journal::{JournalEntry, Mood};

/// A mood with its emoji, or the raw string for moods we don't know.
#[must_use]
pub fn mood_badge(mood: &str) -> String {
    Mood::emoji_for(mood).map_or_else(|| mood.to_string(), |emoji| format!("{emoji} {mood}"))
}

/// Format a list of entries, newest first as given
#[must_use]
pub fn format_entries_pretty(entries: &[JournalEntry], title: &str) -> String {
    if entries.is_empty() {
        return format!("{title} (0 entries)\n  No entries");
    }

    let mut output = format!("{title} ({} entries)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_pretty(entry));
        output.push('\n');
    }

    output
}

/// Format a single entry
#[must_use]
pub fn format_entry_pretty(entry: &JournalEntry) -> String {
    let mut header = entry.date.bold().to_string();
    if let Some(mood) = entry.display_mood() {
        header.push_str(&format!("  {}", mood_badge(mood)));
    }
    header.push_str(&format!("  {}", format!("{} words", entry.word_count()).dimmed()));

    let mut output = format!("{header}\n");
    for line in entry.content.lines() {
        output.push_str(&format!("  {line}\n"));
    }
    output
}

fn due_text(days: i64) -> String {
    match days {
        0 => "due today".yellow().to_string(),
        1 => "due tomorrow".to_string(),
        d if d > 1 => format!("{d} days left"),
        -1 => "1 day overdue".red().to_string(),
        d => format!("{} days overdue", -d).red().to_string(),
    }
}

/// Format one goal with its milestones
#[must_use]
pub fn format_goal_pretty(goal: &Goal, now: &DateTime<Local>) -> String {
    let icon = if goal.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut line = format!(
        "{icon} {}  {} {}  {}%",
        goal.title.bold(),
        goal.category.emoji(),
        goal.category.to_string().dimmed(),
        goal.progress
    );
    if let Some(days) = goal.days_until_target(now) {
        line.push_str(&format!("  {}", due_text(days)));
    }

    let mut output = format!("{line}\n");
    output.push_str(&format!("    {}: {}\n", "ID".dimmed(), goal.id));
    if !goal.description.is_empty() {
        output.push_str(&format!("    {}\n", goal.description));
    }
    for milestone in &goal.milestones {
        let mark = if milestone.completed { "[x]" } else { "[ ]" };
        output.push_str(&format!(
            "    {mark} {}  {}\n",
            milestone.title,
            milestone.id.dimmed()
        ));
    }
    if goal.mention_count > 0 {
        let last = goal.last_mentioned.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "    {}\n",
            format!("Mentioned {} times, last on {last}", goal.mention_count).cyan()
        ));
    }

    output
}

/// Format goals, active first then completed
#[must_use]
pub fn format_goals_pretty(goals: &[Goal], now: &DateTime<Local>) -> String {
    if goals.is_empty() {
        return "Goals (0)\n  No goals yet. Add one with 'pinkink goal add <TITLE>'".to_string();
    }

    let (active, completed) = partition_goals(goals);
    let mut output = String::new();

    output.push_str(&format!("Active goals ({})\n", active.len()));
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for goal in &active {
        output.push_str(&format_goal_pretty(goal, now));
    }

    if !completed.is_empty() {
        output.push_str(&format!("\nCompleted goals ({})\n", completed.len()));
        output.push_str(&"─".repeat(60));
        output.push('\n');
        for goal in &completed {
            output.push_str(&format_goal_pretty(goal, now));
        }
    }

    output
}

/// Format a writing prompt
#[must_use]
pub fn format_prompt_pretty(prompt: &WritingPrompt) -> String {
    format!(
        "{} {}\n  {}\n  {}",
        prompt.category.emoji(),
        prompt.category.to_string().to_uppercase().dimmed(),
        prompt.prompt.bold(),
        format!("Answer with: pinkink prompt respond {} <TEXT>", prompt.id).dimmed()
    )
}

/// Format the prompt catalog
#[must_use]
pub fn format_prompts_pretty(prompts: &[WritingPrompt]) -> String {
    let mut output = format!("Writing prompts ({})\n", prompts.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for prompt in prompts {
        output.push_str(&format!(
            "{:>3}  {} {}  {}\n",
            prompt.id,
            prompt.category.emoji(),
            prompt.prompt,
            prompt.category.to_string().dimmed()
        ));
    }
    output
}

/// Format prompt responses
#[must_use]
pub fn format_responses_pretty(responses: &[PromptResponse]) -> String {
    if responses.is_empty() {
        return "Recent responses (0)\n  No responses yet".to_string();
    }

    let mut output = format!("Recent responses ({})\n", responses.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');
    for response in responses {
        output.push_str(&format!(
            "{}  {}\n  {}\n  {}\n",
            response.date.bold(),
            response.category.to_string().dimmed(),
            response.prompt.italic(),
            response.response
        ));
    }
    output
}

/// Format a sentiment reading
#[must_use]
pub fn format_sentiment_pretty(analysis: &SentimentAnalysis) -> String {
    format!(
        "Mood: {}  {}\n  {}",
        mood_badge(&analysis.mood).bold(),
        format!("({:.0}% confident)", analysis.confidence * 100.0).dimmed(),
        analysis.reason
    )
}

/// Format a weekly summary followed by the week's entries
#[must_use]
pub fn format_summary_pretty(summary: &WeeklySummary, entries: &[JournalEntry]) -> String {
    let mut output = format!(
        "{} {}\n",
        "Weekly reflection".bold().magenta(),
        format!("({} entries)", summary.entry_count).dimmed()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(summary.text.trim());
    output.push_str("\n\n");
    output.push_str(&format_entries_pretty(entries, "This week"));
    output
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::features::goals::NewGoal;
    use crate::features::prompts::find;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_mood_badge() {
        assert_eq!(mood_badge("happy"), "😊 happy");
        assert_eq!(mood_badge("elated"), "elated");
    }

    #[test]
    fn test_format_entries_pretty_empty() {
        plain();
        assert_eq!(format_entries_pretty(&[], "Recent"), "Recent (0 entries)\n  No entries");
    }

    #[test]
    fn test_format_entry_pretty() {
        plain();
        let entry = JournalEntry::new("1", "Mon Oct 19 2026", "Rainy.\nStayed in.", 0)
            .with_mood("tired");
        let out = format_entry_pretty(&entry);

        assert!(out.starts_with("Mon Oct 19 2026  😴 tired  3 words"));
        assert!(out.contains("\n  Rainy.\n  Stayed in.\n"));
    }

    #[test]
    fn test_format_goals_pretty() {
        plain();
        let now = Local.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let goal = Goal::create(
            NewGoal::new("Read 12 books")
                .with_target_date(chrono::NaiveDate::from_ymd_opt(2026, 10, 29).unwrap())
                .with_milestone("First book"),
            &now,
        )
        .unwrap();

        let out = format_goals_pretty(&[goal], &now);
        assert!(out.contains("Active goals (1)"));
        assert!(out.contains("Read 12 books"));
        assert!(out.contains("10 days left"));
        assert!(out.contains("[ ] First book"));
        assert!(!out.contains("Completed goals"));
    }

    #[test]
    fn test_due_text() {
        plain();
        assert_eq!(due_text(0), "due today");
        assert_eq!(due_text(3), "3 days left");
        assert_eq!(due_text(-2), "2 days overdue");
    }

    #[test]
    fn test_format_prompt_pretty() {
        plain();
        let out = format_prompt_pretty(find("9").unwrap());
        assert!(out.contains("GOALS"));
        assert!(out.contains("couldn't fail"));
        assert!(out.contains("pinkink prompt respond 9"));
    }

    #[test]
    fn test_format_sentiment_pretty() {
        plain();
        let analysis = SentimentAnalysis {
            mood: "grateful".to_string(),
            confidence: 0.85,
            reason: "Lots of thanks".to_string(),
        };
        let out = format_sentiment_pretty(&analysis);
        assert!(out.contains("💝 grateful"));
        assert!(out.contains("85% confident"));
    }
}
