use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use pinkink::cli::args::{Cli, Commands};
use pinkink::cli::commands::{self, Context};
use pinkink::config::{Config, Paths};
use pinkink::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    if let Commands::Completions { shell, install } = &cli.command {
        println!("{}", commands::completions(shell, *install)?);
        return Ok(());
    }

    let ctx = Context::open(config, paths)?;

    let output = match cli.command {
        Commands::Write(args) => commands::write(&ctx, args, format)?,
        Commands::Today => commands::today(&ctx, format)?,
        Commands::Recent { limit } => commands::recent(&ctx, limit, format)?,
        Commands::List => commands::list(&ctx, format)?,
        Commands::Stats => commands::stats(&ctx, format)?,
        Commands::Calendar { month } => commands::calendar(&ctx, month.as_deref(), format)?,
        Commands::Goal(args) => commands::goal(&ctx, args.command, format)?,
        Commands::Prompt(args) => commands::prompt(&ctx, args.command, format)?,
        Commands::Analyze { text } => commands::analyze(&ctx, &text, format)?,
        Commands::Summary => commands::summary(&ctx, format)?,
        Commands::Import { file } => commands::import(&ctx, &file, format)?,
        Commands::Export { file, save } => {
            let target = if save {
                Some(ctx.paths.export_file(Local::now().date_naive()))
            } else {
                file
            };
            commands::export(&ctx, target.as_deref(), format)?
        }
        Commands::Config(args) => commands::config(&ctx, args.command, format)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
