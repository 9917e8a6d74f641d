//! Planner configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use leveling_content::ConfigLoader;
use leveling_core::{Ruleset, RulesConfig};

/// Settings shared by every planner command.
#[derive(Clone, Debug, Default)]
pub struct PlannerConfig {
    pub plan_file: Option<PathBuf>,
    pub rules_file: Option<PathBuf>,
    pub ruleset: Option<Ruleset>,
    pub data_dir: PathBuf,
}

impl PlannerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_PLAN_FILE` - Plan used when a command is given none
    /// - `PLANNER_RULES_FILE` - TOML rules configuration (default: built-in rules)
    /// - `PLANNER_RULESET` - `classic` or `remastered`, overrides the plan's ruleset
    /// - `PLANNER_DATA_DIR` - Directory for saved plans (default: platform-specific)
    pub fn from_env() -> Self {
        Self {
            plan_file: env::var_os("PLANNER_PLAN_FILE").map(PathBuf::from),
            rules_file: env::var_os("PLANNER_RULES_FILE").map(PathBuf::from),
            ruleset: read_env::<Ruleset>("PLANNER_RULESET"),
            data_dir: env::var_os("PLANNER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
        }
    }

    /// Rules to fold plans with: the rules file if one is set, otherwise the
    /// built-in defaults.
    pub fn rules(&self) -> Result<RulesConfig> {
        let rules = match &self.rules_file {
            Some(path) => ConfigLoader::load(path)?,
            None => RulesConfig::default(),
        };
        Ok(match self.ruleset {
            Some(ruleset) => rules.with_ruleset(ruleset),
            None => rules,
        })
    }
}

/// Platform data directory for saved plans.
///
/// - Linux: `~/.local/share/leveling-planner/plans`
/// - macOS: `~/Library/Application Support/leveling-planner/plans`
/// - Windows: `%APPDATA%\leveling-planner\plans`
/// - Fallback: `./plans`
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "leveling-planner")
        .map(|dirs| dirs.data_dir().join("plans"))
        .unwrap_or_else(|| PathBuf::from("./plans"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruleset_override_wins() {
        let config = PlannerConfig {
            ruleset: Some(Ruleset::Remastered),
            ..PlannerConfig::default()
        };
        assert_eq!(config.rules().expect("rules").ruleset, Ruleset::Remastered);
    }

    #[test]
    fn rules_file_is_loaded() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("rules.toml");
        std::fs::write(&path, "base_skill_level = 0\n").expect("write");

        let config = PlannerConfig {
            rules_file: Some(path),
            ..PlannerConfig::default()
        };
        let rules = config.rules().expect("rules");
        assert_eq!(rules.base_skill_level, 0);
        assert_eq!(rules.ruleset, Ruleset::Classic);
    }
}
