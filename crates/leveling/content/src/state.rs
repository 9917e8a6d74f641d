//! Versioned, serializable planner state.

use leveling_core::{
    ActiveAbilities, CharacterChoices, Level, LevelUp, LevelingPlan, Ruleset, RulesConfig,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::migrate::{MigrationError, document_version, migrate};

/// Everything the planner persists between sessions.
///
/// Levels are never stored: they are refolded from `choices` and `level_ups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerState {
    pub version: u32,
    pub choices: CharacterChoices,
    /// Ruleset chosen for this plan; `None` defers to [`RulesConfig::ruleset`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruleset: Option<Ruleset>,
    #[serde(default)]
    pub level_ups: Vec<LevelUp>,
    #[serde(default)]
    pub abilities: ActiveAbilities,
}

impl PlannerState {
    pub const CURRENT_VERSION: u32 = 2;

    pub fn new(choices: CharacterChoices, ruleset: Ruleset) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            choices,
            ruleset: Some(ruleset),
            level_ups: Vec::new(),
            abilities: ActiveAbilities::new(),
        }
    }

    pub fn from_plan(plan: &LevelingPlan, abilities: ActiveAbilities) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            choices: plan.choices.clone(),
            ruleset: Some(plan.ruleset),
            level_ups: plan.level_ups().to_vec(),
            abilities,
        }
    }

    /// The stored ruleset, or the configured one when the plan has none.
    pub fn resolved_ruleset(&self, config: &RulesConfig) -> Ruleset {
        self.ruleset.unwrap_or(config.ruleset)
    }

    /// Rebuilds the plan, logging any stored level-up its ruleset rejects.
    pub fn to_plan(&self, config: RulesConfig) -> LevelingPlan {
        let ruleset = self.resolved_ruleset(&config);
        self.to_plan_with(config, ruleset)
    }

    /// Rebuilds the plan under `ruleset` regardless of the stored choice.
    pub fn to_plan_with(&self, config: RulesConfig, ruleset: Ruleset) -> LevelingPlan {
        let plan = LevelingPlan::from_parts(
            self.choices.clone(),
            ruleset,
            config,
            self.level_ups.clone(),
        );
        for (index, error) in plan.invalid_level_ups() {
            tracing::warn!(
                level = index + 1,
                ruleset = %ruleset,
                "stored level-up is invalid: {}",
                error
            );
        }
        plan
    }

    /// Level history with active ability bonuses applied to the skills.
    pub fn display_levels(&self, config: RulesConfig) -> Vec<Level> {
        let modifiers = self.abilities.skill_modifiers();
        self.to_plan(config)
            .levels()
            .iter()
            .map(|level| level.with_skill_modifiers(&modifiers))
            .collect()
    }

    /// Decodes a stored JSON document of any supported version.
    pub fn from_json_value(document: Value) -> Result<Self, MigrationError> {
        let version = document_version(&document)?;
        let migrated = migrate(document, version)?;
        if version != Self::CURRENT_VERSION {
            tracing::info!(
                from = version,
                to = Self::CURRENT_VERSION,
                "migrated planner state"
            );
        }
        serde_json::from_value(migrated).map_err(|e| MigrationError::Malformed(e.to_string()))
    }

    pub fn from_json_str(json: &str) -> Result<Self, MigrationError> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| MigrationError::Malformed(e.to_string()))?;
        Self::from_json_value(document)
    }
}
