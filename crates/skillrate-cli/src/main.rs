mod cli;
mod cli_utils;
mod commands;
mod display;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skillrate=warn,skillrate_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref())?;

    match args.command {
        Command::Rating { profile, json } => {
            commands::rating::run(&profile, &args.charts, config, json)
        }
        Command::Top {
            profile,
            skillset,
            count,
        } => commands::top::run(&profile, &args.charts, config, skillset, count),
        Command::Recalc {
            profile,
            all,
            output,
        } => commands::recalc::run(&profile, &args.charts, config, !all, output.as_deref()),
        Command::Validate { profile, output } => {
            commands::validate::run(&profile, &args.charts, config, output.as_deref())
        }
        Command::Merge {
            target,
            source,
            skip_totals,
            output,
        } => commands::merge::run(
            &target,
            &source,
            &args.charts,
            config,
            skip_totals,
            output.as_deref(),
        ),
    }
}
