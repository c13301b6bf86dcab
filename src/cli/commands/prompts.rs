//! Writing prompt commands.

use chrono::Local;
use colored::Colorize;

use super::{text_or_stdin, Context};
use crate::cli::args::{OutputFormat, PromptCommands};
use crate::error::JournalError;
use crate::features::prompts::{catalog, find, random_prompt};
use crate::output::{format_prompt_pretty, format_prompts_pretty, format_responses_pretty, to_json};

/// Execute prompt subcommands. With no subcommand a random prompt is shown.
///
/// # Errors
///
/// Returns `NotFound` for an unknown prompt id, `InvalidInput` for a blank
/// answer, or a storage error.
pub fn prompt(
    ctx: &Context,
    cmd: Option<PromptCommands>,
    format: OutputFormat,
) -> Result<String, JournalError> {
    match cmd {
        None | Some(PromptCommands::New) => {
            let prompt = random_prompt();
            match format {
                OutputFormat::Json => to_json(prompt),
                OutputFormat::Pretty => Ok(format_prompt_pretty(prompt)),
            }
        }

        Some(PromptCommands::List) => match format {
            OutputFormat::Json => to_json(catalog()),
            OutputFormat::Pretty => Ok(format_prompts_pretty(catalog())),
        },

        Some(PromptCommands::Respond { id, text }) => {
            let prompt =
                find(&id).ok_or_else(|| JournalError::NotFound(format!("Prompt '{id}'")))?;
            let text = text_or_stdin(&text)?;
            let response = ctx.prompts().save_response(prompt, &text, &Local::now())?;
            match format {
                OutputFormat::Json => to_json(&response),
                OutputFormat::Pretty => Ok(format!(
                    "{} {}\n  {}",
                    "Saved".green().bold(),
                    "your response to:".bold(),
                    prompt.prompt.italic()
                )),
            }
        }

        Some(PromptCommands::Recent) => {
            let responses = ctx.prompts().recent()?;
            match format {
                OutputFormat::Json => to_json(&responses),
                OutputFormat::Pretty => Ok(format_responses_pretty(&responses)),
            }
        }
    }
}
