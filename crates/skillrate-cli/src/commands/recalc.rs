//! Recalc command for refreshing stored skillset contributions.

use anyhow::Result;
use skillrate_core::EngineConfig;

use crate::cli_utils;

/// Recalculate contributions and save the profile
pub fn run(
    profile_path: &str,
    charts_path: &str,
    config: EngineConfig,
    only_stale: bool,
    output: Option<&str>,
) -> Result<()> {
    let library = cli_utils::load_charts(charts_path)?;
    let mut profile = cli_utils::load_profile(profile_path, config)?;

    eprintln!(
        "Recalculating {} records (calc version {})...",
        if only_stale { "stale" } else { "all" },
        profile.config().calc_version
    );
    let summary = profile.request_recalculation(&library, only_stale);
    eprintln!(
        "Recomputed {}, zeroed {}, unchanged {}, {} charts not loaded",
        summary.recomputed, summary.zeroed, summary.unchanged, summary.missing_charts
    );
    eprintln!("Player rating: {:.2}", profile.overall_rating());

    cli_utils::save_profile(&profile, profile_path, output)
}
