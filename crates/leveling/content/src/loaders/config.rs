//! Rules configuration loader.

use std::path::Path;

use leveling_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`RulesConfig`] from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file is valid.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            base_skill_level = config.base_skill_level,
            ruleset = %config.ruleset,
            "Loaded rules config from {}",
            path.display()
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))
    }
}
