//! CLI argument definitions for skillrate.

use clap::{Parser, Subcommand};
use skillrate_core::Skillset;

#[derive(Parser)]
#[command(name = "skillrate")]
#[command(about = "Skill rating and leaderboard tool for rhythm game profiles", version)]
pub struct Args {
    /// Engine config file (TOML)
    #[arg(long, value_name = "FILE", env = "SKILLRATE_CONFIG")]
    pub config: Option<String>,

    /// Chart table file (JSON)
    #[arg(long, value_name = "FILE", env = "SKILLRATE_CHARTS", default_value = "charts.json")]
    pub charts: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the player rating of a profile
    Rating {
        /// Profile snapshot (JSON)
        profile: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the best records for a skillset
    Top {
        /// Profile snapshot (JSON)
        profile: String,
        /// Skillset name (e.g. stream, jack, tech)
        #[arg(short, long, default_value = "overall", value_parser = parse_skillset)]
        skillset: Skillset,
        /// Number of records to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
    /// Recalculate stored skillset contributions
    Recalc {
        /// Profile snapshot (JSON)
        profile: String,
        /// Recalculate every record, not only stale ones
        #[arg(long)]
        all: bool,
        /// Output file path (defaults to overwriting the profile)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Mark every record on a rateable chart as valid
    Validate {
        /// Profile snapshot (JSON)
        profile: String,
        /// Output file path (defaults to overwriting the profile)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Merge one profile into another
    Merge {
        /// Profile receiving the scores
        target: String,
        /// Profile to read scores from (left unchanged)
        source: String,
        /// Keep the target's lifetime totals as they are
        #[arg(long)]
        skip_totals: bool,
        /// Output file path (defaults to overwriting the target)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_skillset(value: &str) -> Result<Skillset, String> {
    Skillset::parse_name(value).map_err(|e| e.to_string())
}
