//! Plan file loader.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::loaders::{LoadResult, read_file};
use crate::state::PlannerState;

/// Loader for plan files.
///
/// The format is picked from the extension (`.json` or `.toml`). Both are
/// converted to a JSON document and migrated before decoding, so hand-written
/// plans may use any supported schema version.
pub struct PlanLoader;

impl PlanLoader {
    pub fn load(path: &Path) -> LoadResult<PlannerState> {
        let content = read_file(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let state = match extension.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            other => Err(anyhow::anyhow!(
                "unsupported plan format: {}",
                other.unwrap_or("<none>")
            )),
        }
        .with_context(|| format!("Failed to load plan {}", path.display()))?;

        tracing::debug!(
            level_ups = state.level_ups.len(),
            "Loaded plan from {}",
            path.display()
        );
        Ok(state)
    }

    pub fn parse_json(content: &str) -> LoadResult<PlannerState> {
        Ok(PlannerState::from_json_str(content)?)
    }

    pub fn parse_toml(content: &str) -> LoadResult<PlannerState> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse plan TOML: {}", e))?;
        let document: Value =
            serde_json::to_value(table).context("Failed to convert plan TOML to a document")?;
        Ok(PlannerState::from_json_value(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leveling_core::{Attribute, Race, Ruleset, Skill};

    const TOML_PLAN: &str = r#"
        version = 2
        ruleset = "remastered"

        [choices]
        race = "Breton"
        gender = "Female"
        birthsign = "The Mage"
        specialization = "Magic"
        favored_attributes = ["Intelligence", "Willpower"]
        major_skills = ["Alchemy", "Alteration", "Conjuration", "Destruction",
                        "Illusion", "Mysticism", "Restoration"]

        [[level_ups]]
        skills = { Destruction = 6, Alteration = 4 }
        attributes = { Willpower = 5, Intelligence = 5, Luck = 1 }
    "#;

    #[test]
    fn toml_plans_parse() {
        let state = PlanLoader::parse_toml(TOML_PLAN).expect("parses");
        assert_eq!(state.choices.race, Race::Breton);
        assert_eq!(state.ruleset, Some(Ruleset::Remastered));
        assert_eq!(state.level_ups[0].skills[Skill::Destruction], 6);
        assert_eq!(state.level_ups[0].attributes[Attribute::Luck], 1);
    }

    #[test]
    fn legacy_toml_plans_are_migrated() {
        let legacy = TOML_PLAN
            .replacen("version = 2", "", 1)
            .replacen(
                "attributes = { Willpower = 5, Intelligence = 5, Luck = 1 }",
                "attributes = { WIL = 5, INT = 5, LCK = 1 }",
                1,
            )
            .replacen(
                r#"favored_attributes = ["Intelligence", "Willpower"]"#,
                r#"favored_attributes = ["INT", "WIL"]"#,
                1,
            );

        let state = PlanLoader::parse_toml(&legacy).expect("parses");
        assert_eq!(state.version, PlannerState::CURRENT_VERSION);
        assert_eq!(
            state.choices.favored_attributes,
            vec![Attribute::Intelligence, Attribute::Willpower]
        );
        assert_eq!(state.level_ups[0].attributes[Attribute::Willpower], 5);
    }

    #[test]
    fn unknown_extension_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("plan.yaml");
        std::fs::write(&path, "version: 2").expect("write");
        assert!(PlanLoader::load(&path).is_err());
    }
}
