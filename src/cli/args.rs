use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::goals::GoalCategory;
use crate::journal::Mood;

#[derive(Parser)]
#[command(name = "pinkink")]
#[command(about = "A gentle journaling companion for the terminal")]
#[command(long_about = "pinkink - a journaling companion for the terminal

Write one entry a day, tag how you feel, keep a streak going, track goals,
answer writing prompts, and ask an AI for a mood reading or a weekly
reflection.

QUICK START:
  pinkink write \"Slept well, long walk at lunch\"   Save today's entry
  pinkink write --mood grateful < note.txt         Entry from stdin
  pinkink stats                                     Streaks and word counts
  pinkink calendar                                  This month's moods
  pinkink prompt                                    Something to write about

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pinkink <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write today's entry
    ///
    /// Saves the text as today's journal entry. Writing again on the same
    /// day replaces the earlier entry. With no text, the entry is read
    /// from stdin.
    ///
    /// # Examples
    ///
    ///   pinkink write "Coffee with Sam, felt lighter afterwards"
    ///   pinkink write --mood peaceful "Quiet evening"
    ///   pinkink write --analyze < draft.txt
    #[command(alias = "w")]
    Write(WriteArgs),

    /// Show today's entry
    #[command(alias = "t")]
    Today,

    /// Show recent entries (today excluded)
    ///
    /// # Examples
    ///
    ///   pinkink recent
    ///   pinkink recent --limit 7
    #[command(alias = "r")]
    Recent {
        /// How many of the latest entries to consider
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List every entry, newest first
    #[command(alias = "ls")]
    List,

    /// Show writing statistics
    ///
    /// Current and longest streak, total entries and words, average words
    /// per entry, and progress toward seven entries a week.
    #[command(alias = "s")]
    Stats,

    /// Show the mood calendar for a month
    ///
    /// # Examples
    ///
    ///   pinkink calendar
    ///   pinkink calendar --month 2026-09
    #[command(alias = "cal")]
    Calendar {
        /// Month to show, as YYYY-MM (default: this month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Track goals and milestones
    #[command(alias = "g")]
    Goal(GoalArgs),

    /// Writing prompts
    ///
    /// With no subcommand, shows a random prompt.
    #[command(alias = "p")]
    Prompt(PromptArgs),

    /// Analyse the mood of some text (or today's entry)
    ///
    /// Needs an API key. The mood found for today's entry is stored and
    /// shown in the calendar.
    Analyze {
        /// Text to analyse. Defaults to today's entry.
        text: Vec<String>,
    },

    /// Generate an AI reflection on the past week
    Summary,

    /// Import entries from a JSON file
    ///
    /// Accepts the camelCase entry array written by `export`. Entries with
    /// an id already present replace the stored entry.
    Import {
        /// JSON file to read
        file: PathBuf,
    },

    /// Export all entries as JSON
    ///
    /// # Examples
    ///
    ///   pinkink export > backup.json
    ///   pinkink export --save
    Export {
        /// File to write (default: stdout)
        #[arg(conflicts_with = "save")]
        file: Option<PathBuf>,

        /// Write a dated snapshot into the exports directory
        #[arg(long)]
        save: bool,
    },

    /// Show or change configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pinkink completions zsh > ~/.zsh/completions/_pinkink
    ///   pinkink completions bash --install
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args)]
pub struct WriteArgs {
    /// Entry text. Read from stdin when omitted.
    pub text: Vec<String>,

    /// Mood to tag the entry with
    ///
    /// One of: happy, sad, peaceful, frustrated, thoughtful, tired,
    /// excited, anxious, grateful, neutral.
    #[arg(short, long)]
    pub mood: Option<Mood>,

    /// Run sentiment analysis and store the detected mood
    #[arg(short, long)]
    pub analyze: bool,
}

#[derive(Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: GoalCommands,
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a goal
    ///
    /// # Examples
    ///
    ///   pinkink goal add "Learn Spanish" -c learning -t "in 3 months" \
    ///       -m "Finish unit 1" -m "Watch a film without subtitles"
    Add(GoalAddArgs),

    /// List goals
    #[command(alias = "ls")]
    List,

    /// Toggle a milestone's completion
    Toggle {
        /// Goal id
        goal_id: String,
        /// Milestone id
        milestone_id: String,
    },

    /// Delete a goal
    #[command(alias = "rm")]
    Delete {
        /// Goal id
        goal_id: String,
    },

    /// Count how often your entries mention each goal
    Analyze,
}

#[derive(Args)]
pub struct GoalAddArgs {
    /// Goal title
    pub title: String,

    /// Longer description; its words also count as mentions
    #[arg(short, long)]
    pub description: Option<String>,

    /// Category (personal, health, career, learning, relationships)
    #[arg(short, long, default_value = "personal")]
    pub category: GoalCategory,

    /// Target date (e.g. "2026-12-31", "dec 31", "in 3 weeks", "friday")
    #[arg(short, long)]
    pub target: Option<String>,

    /// Milestone title (repeatable)
    #[arg(short, long = "milestone")]
    pub milestones: Vec<String>,
}

#[derive(Args)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub command: Option<PromptCommands>,
}

#[derive(Subcommand)]
pub enum PromptCommands {
    /// Show a random prompt
    New,

    /// List all prompts
    #[command(alias = "ls")]
    List,

    /// Answer a prompt
    ///
    /// # Examples
    ///
    ///   pinkink prompt respond 6 "Soft yellow, like early light"
    Respond {
        /// Prompt id (see `pinkink prompt list`)
        id: String,
        /// Your answer. Read from stdin when omitted.
        text: Vec<String>,
    },

    /// Show your latest answers
    Recent,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (API keys masked)
    Show,

    /// Store the completion API key in the local database
    SetKey {
        /// API key
        key: String,
    },

    /// Remove the API key stored in the local database
    ClearKey,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show where files are kept
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pinkink").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_write_args() {
        let cli = parse(&["write", "--mood", "Grateful", "a", "good", "day"]);
        match cli.command {
            Commands::Write(args) => {
                assert_eq!(args.text, ["a", "good", "day"]);
                assert_eq!(args.mood, Some(Mood::Grateful));
                assert!(!args.analyze);
            }
            _ => panic!("expected write"),
        }
    }

    #[test]
    fn test_unknown_mood_rejected() {
        let result = Cli::try_parse_from(["pinkink", "write", "--mood", "elated", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["stats", "-o", "json", "-vv"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn test_goal_add_args() {
        let cli = parse(&[
            "goal", "add", "Run 10k", "-c", "health", "-t", "in 6 weeks", "-m", "5k", "-m", "8k",
        ]);
        match cli.command {
            Commands::Goal(GoalArgs {
                command: GoalCommands::Add(args),
            }) => {
                assert_eq!(args.title, "Run 10k");
                assert_eq!(args.category, GoalCategory::Health);
                assert_eq!(args.target.as_deref(), Some("in 6 weeks"));
                assert_eq!(args.milestones, ["5k", "8k"]);
            }
            _ => panic!("expected goal add"),
        }
    }

    #[test]
    fn test_prompt_without_subcommand() {
        let cli = parse(&["prompt"]);
        assert!(matches!(cli.command, Commands::Prompt(PromptArgs { command: None })));
    }
}
