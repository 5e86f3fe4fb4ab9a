use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dp_cli::commands::util::Planner;
use dp_cli::commands::{add, moves, remove, show, split, summary};
use dp_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let planner = Planner::from_config(&config)?;
    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut out = io::stdout().lock();

    match command {
        Commands::Show { flat } => show::run(&mut out, &planner, date, *flat)?,
        Commands::Summary { days, json } => summary::run(&mut out, &planner, date, *days, *json)?,
        Commands::Add {
            start,
            end,
            category,
            name,
        } => add::run(&mut out, &planner, date, *start, *end, category, name)?,
        Commands::Remove { index } => remove::run(&mut out, &planner, date, *index)?,
        Commands::Split { index, at } => split::run(&mut out, &planner, date, *index, *at)?,
        Commands::Move { index, by, cascade } => {
            moves::run(&mut out, &planner, date, *index, *by, *cascade)?;
        }
    }

    Ok(())
}
