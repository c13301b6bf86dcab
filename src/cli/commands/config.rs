//! Configuration commands.

use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::ai::API_KEY_ENV;
use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{mask_key, Config};
use crate::error::JournalError;
use crate::output::to_json;
use crate::storage::API_KEY_KEY;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank key or an existing config file
/// without `--force`, or a storage error.
pub fn config(ctx: &Context, cmd: ConfigCommands, format: OutputFormat) -> Result<String, JournalError> {
    match cmd {
        ConfigCommands::Show => {
            let stored = ctx.store.get_item(API_KEY_KEY)?.is_some();
            let from_env = std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty());
            match format {
                OutputFormat::Json => to_json(&json!({
                    "config": ctx.config.redacted(),
                    "storedApiKey": stored,
                    "envApiKey": from_env
                })),
                OutputFormat::Pretty => {
                    let mut output = ctx.config.to_redacted_yaml()?;
                    output.push_str(&format!(
                        "\n# {}: {}\n# {API_KEY_ENV}: {}",
                        "stored API key".dimmed(),
                        if stored { "set" } else { "not set" },
                        if from_env { "set" } else { "not set" }
                    ));
                    Ok(output)
                }
            }
        }

        ConfigCommands::SetKey { key } => {
            let key = key.trim();
            if key.is_empty() {
                return Err(JournalError::InvalidInput("API key cannot be empty".to_string()));
            }
            ctx.store.set_item(API_KEY_KEY, key)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "stored": mask_key(key) })),
                OutputFormat::Pretty => Ok(format!(
                    "{} API key {}",
                    "Saved".green().bold(),
                    mask_key(key).dimmed()
                )),
            }
        }

        ConfigCommands::ClearKey => {
            let removed = ctx.store.remove_item(API_KEY_KEY)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "removed": removed })),
                OutputFormat::Pretty if removed => Ok(format!("{} stored API key", "Removed".red().bold())),
                OutputFormat::Pretty => Ok("No stored API key".to_string()),
            }
        }

        ConfigCommands::Init { force } => {
            let path = &ctx.paths.config_file;
            if path.exists() && !force {
                return Err(JournalError::InvalidInput(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to_path(path)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "written": path.display().to_string() })),
                OutputFormat::Pretty => Ok(format!(
                    "{} {}",
                    "Wrote".green().bold(),
                    path.display()
                )),
            }
        }

        ConfigCommands::Path => {
            let paths = &ctx.paths;
            match format {
                OutputFormat::Json => to_json(&json!({
                    "root": paths.root.display().to_string(),
                    "config": paths.config_file.display().to_string(),
                    "database": paths.database.display().to_string(),
                    "exports": paths.exports.display().to_string()
                })),
                OutputFormat::Pretty => Ok(format!(
                    "root:     {}\nconfig:   {}\ndatabase: {}\nexports:  {}",
                    paths.root.display(),
                    paths.config_file.display(),
                    paths.database.display(),
                    paths.exports.display()
                )),
            }
        }
    }
}
