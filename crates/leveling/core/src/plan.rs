//! A character build: creation choices plus the ordered level-up history.

use crate::config::RulesConfig;
use crate::engine::{
    CharacterChoices, Level, LevelUp, Ruleset, apply_level_up, compute_base_level, fold_levels,
};
use crate::error::{LevelUpError, PlanError};

/// Character choices and level-ups, with the level history derived on demand.
///
/// `level_ups[n]` takes level `n + 1` to level `n + 2`. Histories are small,
/// so every query refolds from the base level instead of caching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelingPlan {
    pub choices: CharacterChoices,
    pub ruleset: Ruleset,
    config: RulesConfig,
    level_ups: Vec<LevelUp>,
}

impl LevelingPlan {
    /// Empty plan using the ruleset from `config`.
    pub fn new(choices: CharacterChoices, config: RulesConfig) -> Self {
        Self {
            choices,
            ruleset: config.ruleset,
            config,
            level_ups: Vec::new(),
        }
    }

    /// Rebuilds a plan from stored parts without validating the level-ups.
    ///
    /// Use [`invalid_level_ups`](Self::invalid_level_ups) to inspect what was
    /// loaded.
    pub fn from_parts(
        choices: CharacterChoices,
        ruleset: Ruleset,
        config: RulesConfig,
        level_ups: Vec<LevelUp>,
    ) -> Self {
        Self {
            choices,
            ruleset,
            config,
            level_ups,
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn level_ups(&self) -> &[LevelUp] {
        &self.level_ups
    }

    pub fn into_level_ups(self) -> Vec<LevelUp> {
        self.level_ups
    }

    pub fn base_level(&self) -> Level {
        compute_base_level(&self.choices, &self.config)
    }

    /// Every level from 1 to the current one.
    pub fn levels(&self) -> Vec<Level> {
        fold_levels(self.base_level(), &self.level_ups, self.ruleset)
    }

    pub fn current_level(&self) -> Level {
        self.level_before(self.level_ups.len())
    }

    /// Level reached after the first `count` level-ups.
    fn level_before(&self, count: usize) -> Level {
        self.level_ups[..count]
            .iter()
            .fold(self.base_level(), |level, level_up| {
                apply_level_up(&level, level_up, self.ruleset)
            })
    }

    /// Validates `level_up` against the current level and appends it.
    ///
    /// Returns the new current level.
    pub fn commit_level_up(&mut self, level_up: LevelUp) -> Result<Level, PlanError> {
        let current = self.current_level();
        self.check(&current, &level_up)?;
        self.level_ups.push(level_up);
        Ok(apply_level_up(&current, &level_up, self.ruleset))
    }

    /// Replaces the level-up at `index`, validated against the level it
    /// applies to. Later level-ups are kept as they are.
    pub fn replace_level_up(&mut self, index: usize, level_up: LevelUp) -> Result<(), PlanError> {
        let len = self.level_ups.len();
        if index >= len {
            return Err(PlanError::NoSuchLevelUp { index, len });
        }

        let previous = self.level_before(index);
        self.check(&previous, &level_up)?;
        self.level_ups[index] = level_up;
        Ok(())
    }

    /// Keeps the first `len` level-ups.
    pub fn truncate(&mut self, len: usize) {
        self.level_ups.truncate(len);
    }

    /// Removes and returns the last level-up.
    pub fn undo(&mut self) -> Option<LevelUp> {
        self.level_ups.pop()
    }

    /// Level-ups that fail the plan's ruleset, with their index.
    pub fn invalid_level_ups(&self) -> Vec<(usize, LevelUpError)> {
        let levels = self.levels();
        self.level_ups
            .iter()
            .zip(&levels)
            .enumerate()
            .filter_map(|(index, (level_up, previous))| {
                self.ruleset
                    .validate(previous, level_up, &self.choices.major_skills)
                    .err()
                    .map(|error| (index, error))
            })
            .collect()
    }

    fn check(&self, previous: &Level, level_up: &LevelUp) -> Result<(), PlanError> {
        self.ruleset
            .validate(previous, level_up, &self.choices.major_skills)
            .map_err(|source| PlanError::Rejected {
                level: previous.level,
                source,
            })
    }
}
