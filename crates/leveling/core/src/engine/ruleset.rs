//! Rulesets and the level-up fold step.

use crate::config::RulesConfig;
use crate::error::LevelUpError;
use crate::stats::{Attribute, Skill};

use super::validation::{validate_classic, validate_remastered};
use super::{Level, LevelUp};

/// The two leveling rulesets.
///
/// They share the additive application of deltas and differ in the health
/// formula and in the validity gate.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Ruleset {
    #[default]
    Classic,
    Remastered,
}

impl Ruleset {
    pub const fn all() -> [Ruleset; 2] {
        [Ruleset::Classic, Ruleset::Remastered]
    }

    /// Health after applying `level_up` to `previous`.
    ///
    /// Classic health carries forward and adds a tenth of the post-raise
    /// Endurance. Remastered health is recomputed from this level-up's deltas
    /// and the previous level number alone.
    pub fn health(self, previous: &Level, level_up: &LevelUp) -> i32 {
        let strength = level_up.attributes[Attribute::Strength];
        let endurance = level_up.attributes[Attribute::Endurance];
        match self {
            Ruleset::Classic => {
                let new_endurance = previous.attributes[Attribute::Endurance] + endurance;
                previous.health
                    + endurance * RulesConfig::BASE_HEALTH_MULTIPLIER
                    + new_endurance.div_euclid(RulesConfig::HEALTH_DIVISOR)
            }
            // floor(STR * 2/3 + END * 4/3 + END / 10 * level), over a common
            // denominator of 30.
            Ruleset::Remastered => {
                (strength * 20 + endurance * 40 + endurance * 3 * previous.level).div_euclid(30)
            }
        }
    }

    /// Checks `level_up` against this ruleset's gate.
    ///
    /// `major_skills` only matters for the classic ruleset.
    pub fn validate(
        self,
        previous: &Level,
        level_up: &LevelUp,
        major_skills: &[Skill],
    ) -> Result<(), LevelUpError> {
        match self {
            Ruleset::Classic => validate_classic(previous, level_up, major_skills),
            Ruleset::Remastered => validate_remastered(previous, level_up),
        }
    }

    pub fn is_valid(self, previous: &Level, level_up: &LevelUp, major_skills: &[Skill]) -> bool {
        self.validate(previous, level_up, major_skills).is_ok()
    }
}

/// Applies `level_up` to `previous` and returns the next level.
///
/// Deltas are added as given. Nothing is validated or clamped, so an over-cap
/// level-up produces an over-cap snapshot.
pub fn apply_level_up(previous: &Level, level_up: &LevelUp, ruleset: Ruleset) -> Level {
    let deltas = &level_up.attributes;
    let strength = deltas[Attribute::Strength];

    Level {
        level: previous.level + 1,
        attributes: previous.attributes + level_up.attributes,
        skills: previous.skills + level_up.skills,
        health: ruleset.health(previous, level_up),
        magicka: previous.magicka + deltas[Attribute::Intelligence] * RulesConfig::MAGICKA_MULTIPLIER,
        stamina: previous.stamina
            + deltas[Attribute::Endurance]
            + strength
            + deltas[Attribute::Agility]
            + deltas[Attribute::Willpower],
        encumbrance: previous.encumbrance + strength * RulesConfig::ENCUMBRANCE_MULTIPLIER,
    }
}

/// Folds `level_ups` over `base`, returning `[base, base + 1, ...]`.
pub fn fold_levels<'a, I>(base: Level, level_ups: I, ruleset: Ruleset) -> Vec<Level>
where
    I: IntoIterator<Item = &'a LevelUp>,
{
    let mut levels = vec![base];
    let mut current = base;
    for level_up in level_ups {
        current = apply_level_up(&current, level_up, ruleset);
        levels.push(current);
    }
    levels
}
