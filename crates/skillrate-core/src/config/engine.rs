use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::leaderboard::DEFAULT_DEPTH;
use crate::error::Result;

/// Runtime settings for the rating engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Current revision of the contribution formula. Records stamped with a
    /// different value are stale.
    pub calc_version: u32,
    /// Leaderboard depth built on load and after recalculation.
    pub top_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            calc_version: 1,
            top_depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config = Self::parse(&content)?;
        debug!(
            "Loaded engine config from {:?}: calc_version={}, top_depth={}",
            path.as_ref(),
            config.calc_version,
            config.top_depth
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = EngineConfig::parse("calc_version = 7\ntop_depth = 10\n").unwrap();
        assert_eq!(config.calc_version, 7);
        assert_eq!(config.top_depth, 10);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = EngineConfig::parse("calc_version = 3\n").unwrap();
        assert_eq!(config.calc_version, 3);
        assert_eq!(config.top_depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_parse_invalid() {
        let result = EngineConfig::parse("calc_version = \"abc\"");
        assert!(matches!(result, Err(crate::Error::ConfigParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_depth = 50").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.top_depth, 50);
        assert_eq!(config.calc_version, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load("/nonexistent/skillrate.toml");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
