//! Merge command for combining two profiles.

use anyhow::Result;
use skillrate_core::EngineConfig;

use crate::cli_utils;

/// Merge `source` into `target`, recalculate stale records and save
pub fn run(
    target_path: &str,
    source_path: &str,
    charts_path: &str,
    config: EngineConfig,
    skip_totals: bool,
    output: Option<&str>,
) -> Result<()> {
    let library = cli_utils::load_charts(charts_path)?;
    let mut target = cli_utils::load_profile(target_path, config.clone())?;
    let source = cli_utils::load_profile(source_path, config)?;

    let summary = target.merge_from(&source, skip_totals);
    eprintln!(
        "Added {} charts, {} records, {} screenshots",
        summary.charts_added, summary.records_added, summary.screenshots_added
    );
    if skip_totals {
        eprintln!("Totals left unchanged");
    }

    target.request_recalculation(&library, true);
    eprintln!("Player rating: {:.2}", target.overall_rating());

    cli_utils::save_profile(&target, target_path, output)
}
