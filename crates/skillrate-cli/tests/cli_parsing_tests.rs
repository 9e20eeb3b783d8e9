//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would need profile files).

use clap::Parser;
use skillrate_core::Skillset;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "skillrate")]
struct Args {
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    #[arg(long, value_name = "FILE", default_value = "charts.json")]
    charts: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Rating {
        profile: String,
        #[arg(long)]
        json: bool,
    },
    Top {
        profile: String,
        #[arg(short, long, default_value = "overall", value_parser = parse_skillset)]
        skillset: Skillset,
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
    Recalc {
        profile: String,
        #[arg(long)]
        all: bool,
        #[arg(short, long)]
        output: Option<String>,
    },
    Validate {
        profile: String,
        #[arg(short, long)]
        output: Option<String>,
    },
    Merge {
        target: String,
        source: String,
        #[arg(long)]
        skip_totals: bool,
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_skillset(value: &str) -> Result<Skillset, String> {
    Skillset::parse_name(value).map_err(|e| e.to_string())
}

#[test]
fn test_parse_no_command_fails() {
    assert!(Args::try_parse_from(["skillrate"]).is_err());
}

#[test]
fn test_parse_rating_defaults() {
    let args = Args::try_parse_from(["skillrate", "rating", "me.json"]).unwrap();
    assert_eq!(args.charts, "charts.json");
    assert!(args.config.is_none());
    match args.command {
        Command::Rating { profile, json } => {
            assert_eq!(profile, "me.json");
            assert!(!json);
        }
        _ => panic!("Expected Rating command"),
    }
}

#[test]
fn test_parse_global_files() {
    let args = Args::try_parse_from([
        "skillrate",
        "--config",
        "engine.toml",
        "--charts",
        "library.json",
        "rating",
        "me.json",
        "--json",
    ])
    .unwrap();
    assert_eq!(args.config, Some("engine.toml".to_string()));
    assert_eq!(args.charts, "library.json");
    assert!(matches!(args.command, Command::Rating { json: true, .. }));
}

#[test]
fn test_parse_top_defaults() {
    let args = Args::try_parse_from(["skillrate", "top", "me.json"]).unwrap();
    match args.command {
        Command::Top {
            skillset, count, ..
        } => {
            assert_eq!(skillset, Skillset::Overall);
            assert_eq!(count, 10);
        }
        _ => panic!("Expected Top command"),
    }
}

#[test]
fn test_parse_top_skillset_alias() {
    let args = Args::try_parse_from(["skillrate", "top", "me.json", "-s", "jack", "-n", "3"]).unwrap();
    match args.command {
        Command::Top {
            skillset, count, ..
        } => {
            assert_eq!(skillset, Skillset::JackSpeed);
            assert_eq!(count, 3);
        }
        _ => panic!("Expected Top command"),
    }
}

#[test]
fn test_parse_top_unknown_skillset_fails() {
    let result = Args::try_parse_from(["skillrate", "top", "me.json", "--skillset", "speed"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_recalc_all_with_output() {
    let args =
        Args::try_parse_from(["skillrate", "recalc", "me.json", "--all", "-o", "out.json"]).unwrap();
    match args.command {
        Command::Recalc {
            profile,
            all,
            output,
        } => {
            assert_eq!(profile, "me.json");
            assert!(all);
            assert_eq!(output, Some("out.json".to_string()));
        }
        _ => panic!("Expected Recalc command"),
    }
}

#[test]
fn test_parse_validate() {
    let args = Args::try_parse_from(["skillrate", "validate", "me.json"]).unwrap();
    assert!(matches!(args.command, Command::Validate { output: None, .. }));
}

#[test]
fn test_parse_merge() {
    let args =
        Args::try_parse_from(["skillrate", "merge", "machine.json", "old.json", "--skip-totals"])
            .unwrap();
    match args.command {
        Command::Merge {
            target,
            source,
            skip_totals,
            output,
        } => {
            assert_eq!(target, "machine.json");
            assert_eq!(source, "old.json");
            assert!(skip_totals);
            assert!(output.is_none());
        }
        _ => panic!("Expected Merge command"),
    }
}

#[test]
fn test_parse_merge_requires_source() {
    assert!(Args::try_parse_from(["skillrate", "merge", "machine.json"]).is_err());
}
