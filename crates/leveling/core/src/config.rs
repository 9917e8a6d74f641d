use crate::engine::Ruleset;
use crate::stats::Attribute;

/// Leveling rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Starting level of every skill before race, specialization and major
    /// skill bonuses.
    pub base_skill_level: i32,

    /// Ruleset applied when a plan does not choose one explicitly.
    pub ruleset: Ruleset,
}

impl RulesConfig {
    // ===== character creation =====
    pub const BASE_ATTRIBUTE: i32 = 40;
    pub const BASE_LUCK: i32 = 50;
    pub const FAVORED_ATTRIBUTE_BONUS: i32 = 5;
    pub const SPECIALIZATION_BONUS: i32 = 5;
    pub const MAJOR_SKILL_BONUS: i32 = 20;
    pub const NUM_FAVORED_ATTRIBUTES: usize = 2;
    pub const NUM_MAJOR_SKILLS: usize = 7;

    // ===== caps =====
    pub const MAX_ATTRIBUTE_LEVEL: i32 = 100;
    pub const MAX_SKILL_LEVEL: i32 = 100;

    // ===== derived stats =====
    pub const BASE_HEALTH_MULTIPLIER: i32 = 2;
    /// Classic health gains `floor(END / HEALTH_DIVISOR)` per level.
    pub const HEALTH_DIVISOR: i32 = 10;
    pub const MAGICKA_MULTIPLIER: i32 = 2;
    pub const ENCUMBRANCE_MULTIPLIER: i32 = 5;

    // ===== level-up gates =====
    pub const NUM_RAISED_ATTRIBUTES: usize = 3;
    pub const MAJOR_SKILL_UPS_PER_LEVEL: i32 = 10;
    pub const SKILL_UPS_FOR_MAX_ATTRIBUTE_BONUS: i32 = 10;
    pub const VIRTUES_PER_LEVEL: i32 = 14;
    pub const VIRTUES_PER_LUCK: i32 = 4;
    pub const MAX_VIRTUES_PER_ATTRIBUTE: i32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_SKILL_LEVEL: i32 = 5;
    pub const CLASSIC_BASE_SKILL_LEVEL: i32 = 0;

    pub fn new() -> Self {
        Self {
            base_skill_level: Self::DEFAULT_BASE_SKILL_LEVEL,
            ruleset: Ruleset::default(),
        }
    }

    /// Configuration for the classic data set, where skills start at 0.
    pub fn classic_data() -> Self {
        Self {
            base_skill_level: Self::CLASSIC_BASE_SKILL_LEVEL,
            ruleset: Ruleset::Classic,
        }
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Starting value of `attribute` before any modifiers.
    pub const fn base_attribute(attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Luck => Self::BASE_LUCK,
            _ => Self::BASE_ATTRIBUTE,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
