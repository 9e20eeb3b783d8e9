//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result};
use skillrate_core::{ChartTable, EngineConfig, Profile};

/// Load the engine config, falling back to defaults when no file is given.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Ok(EngineConfig::default()),
    }
}

pub fn load_charts(path: &str) -> Result<ChartTable> {
    let table = ChartTable::load(path)
        .with_context(|| format!("Failed to load chart table from {}", path))?;
    eprintln!("Loaded {} charts", table.len());
    Ok(table)
}

pub fn load_profile(path: &str, config: EngineConfig) -> Result<Profile> {
    let profile =
        Profile::load(path, config).with_context(|| format!("Failed to load profile {}", path))?;
    eprintln!(
        "Loaded profile {} ({} records)",
        path,
        profile.scores().total_records()
    );
    Ok(profile)
}

/// Write `profile` to `output`, or back to `original` when no output is given.
pub fn save_profile(profile: &Profile, original: &str, output: Option<&str>) -> Result<()> {
    let path = output.unwrap_or(original);
    profile
        .save(path)
        .with_context(|| format!("Failed to write profile {}", path))?;
    eprintln!("Saved to: {}", path);
    Ok(())
}
