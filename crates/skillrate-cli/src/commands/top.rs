//! Top command for listing a skillset's best records.

use anyhow::Result;
use skillrate_core::{EngineConfig, Skillset};

use crate::cli_utils;
use crate::display;

/// Print the `count` best records for `skillset`
pub fn run(
    profile_path: &str,
    charts_path: &str,
    config: EngineConfig,
    skillset: Skillset,
    count: usize,
) -> Result<()> {
    let library = cli_utils::load_charts(charts_path)?;
    let mut profile = cli_utils::load_profile(profile_path, config)?;

    profile.rebuild_leaderboard(&library, skillset, count);

    let mut shown = 0;
    for rank in 1..=count {
        let Some((chart, record)) = profile.top_record(&library, skillset, rank) else {
            break;
        };
        let value = record.rated_value(skillset);
        println!("{}", display::format_top_line(rank, chart, record, value));
        shown += 1;
    }

    if shown < count {
        eprintln!("Only {} rated records for {}", shown, skillset);
    }

    Ok(())
}
