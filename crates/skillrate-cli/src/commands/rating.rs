//! Rating command for showing a profile's player rating.

use anyhow::Result;
use skillrate_core::EngineConfig;

use crate::cli_utils;
use crate::display;

/// Compute and print the player rating
pub fn run(profile_path: &str, charts_path: &str, config: EngineConfig, json: bool) -> Result<()> {
    let library = cli_utils::load_charts(charts_path)?;
    let mut profile = cli_utils::load_profile(profile_path, config)?;

    let rating = profile.calc_player_rating(&library);

    if json {
        println!("{}", serde_json::to_string_pretty(&rating)?);
    } else {
        let name = if profile.display_name.is_empty() {
            profile_path
        } else {
            profile.display_name.as_str()
        };
        println!("{}", display::format_rating(name, &rating));
    }

    Ok(())
}
