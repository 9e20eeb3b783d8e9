//! Validate command for marking records on rateable charts as valid.

use anyhow::Result;
use skillrate_core::EngineConfig;

use crate::cli_utils;

/// Validate every record on an eligible chart and save the profile
pub fn run(
    profile_path: &str,
    charts_path: &str,
    config: EngineConfig,
    output: Option<&str>,
) -> Result<()> {
    let library = cli_utils::load_charts(charts_path)?;
    let mut profile = cli_utils::load_profile(profile_path, config)?;

    let validated = profile.validate_all(&library);
    profile.calc_player_rating(&library);
    eprintln!("Validated {} records", validated);

    cli_utils::save_profile(&profile, profile_path, output)
}
