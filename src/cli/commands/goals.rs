//! Goal tracking commands.

use chrono::{Local, NaiveDate};
use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::cli::args::{GoalAddArgs, GoalCommands, OutputFormat};
use crate::core::parse_target_date;
use crate::error::JournalError;
use crate::features::goals::{Goal, NewGoal};
use crate::output::{format_goal_pretty, format_goals, to_json};

/// Execute goal subcommands.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank title or unreadable target date,
/// `NotFound` for unknown ids, or a storage error.
pub fn goal(ctx: &Context, cmd: GoalCommands, format: OutputFormat) -> Result<String, JournalError> {
    let storage = ctx.goals();
    let now = Local::now();

    match cmd {
        GoalCommands::Add(args) => {
            let goal = storage.add(new_goal(args, now.date_naive())?, &now)?;
            match format {
                OutputFormat::Json => to_json(&goal),
                OutputFormat::Pretty => Ok(format!(
                    "{} {}\n\n{}",
                    "Added goal".green().bold(),
                    goal.title.bold(),
                    format_goal_pretty(&goal, &now)
                )),
            }
        }

        GoalCommands::List => format_goals(&storage.list()?, &now, format),

        GoalCommands::Toggle {
            goal_id,
            milestone_id,
        } => {
            let (goal, milestone) = storage.toggle_milestone(&goal_id, &milestone_id, &now)?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "goal": goal,
                    "milestone": milestone
                })),
                OutputFormat::Pretty => {
                    let verb = if milestone.completed {
                        "Completed".green().bold()
                    } else {
                        "Reopened".yellow().bold()
                    };
                    let mut output = format!("{verb} {}\n\n", milestone.title);
                    output.push_str(&format_goal_pretty(&goal, &now));
                    if goal.completed {
                        output.push_str(&format!("\n{}", "🎉 Goal complete!".green().bold()));
                    }
                    Ok(output)
                }
            }
        }

        GoalCommands::Delete { goal_id } => {
            let removed = storage.delete(&goal_id)?;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "deleted": removed.id,
                    "title": removed.title
                })),
                OutputFormat::Pretty => Ok(format!(
                    "{} {}",
                    "Deleted goal".red().bold(),
                    removed.title
                )),
            }
        }

        GoalCommands::Analyze => {
            let entries = ctx.journal().entries()?;
            let goals = storage.analyze(&entries)?;
            match format {
                OutputFormat::Json => format_goals(&goals, &now, format),
                OutputFormat::Pretty => Ok(format_mentions(&goals, entries.len())),
            }
        }
    }
}

fn new_goal(args: GoalAddArgs, today: NaiveDate) -> Result<NewGoal, JournalError> {
    let mut new = NewGoal::new(args.title).with_category(args.category);

    if let Some(description) = args.description {
        new = new.with_description(description);
    }
    if let Some(target) = args.target {
        let date = parse_target_date(&target, today).ok_or_else(|| {
            JournalError::InvalidInput(format!("Could not understand target date '{target}'"))
        })?;
        new = new.with_target_date(date);
    }

    Ok(args
        .milestones
        .into_iter()
        .fold(new, NewGoal::with_milestone))
}

fn format_mentions(goals: &[Goal], entry_count: usize) -> String {
    if goals.is_empty() {
        return "No goals to analyse".to_string();
    }

    let mut output = format!("Goal mentions across {entry_count} entries\n");
    output.push_str(&"─".repeat(60));
    output.push('\n');

    let width = goals.iter().map(|g| g.title.chars().count()).max().unwrap_or(0);
    for goal in goals {
        let last = goal
            .last_mentioned
            .as_deref()
            .map_or_else(String::new, |d| format!("  last {d}"));
        output.push_str(&format!(
            "  {} {:<width$}  {:>3}{}\n",
            goal.category.emoji(),
            goal.title,
            goal.mention_count.to_string().cyan(),
            last.dimmed()
        ));
    }
    output
}
