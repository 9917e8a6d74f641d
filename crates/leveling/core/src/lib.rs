//! Deterministic leveling rules for character build planning.
//!
//! `leveling-core` holds the reference tables, the level-up engine and the
//! validity gates of both rulesets. Everything is a pure function: callers own
//! the state (see [`plan::LevelingPlan`]) and pass it in by value or reference.
//! The level history is [`compute_base_level`] followed by a fold of
//! [`apply_level_up`] over the ordered level-ups.
pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod stats;
pub mod tables;
pub use config::RulesConfig;
pub use engine::{
    CharacterChoices, Level, LevelUp, Ruleset, VirtueLedger, apply_level_up,
    attribute_bonus_from_skill_ups, classic_attribute_deltas, classic_level_up,
    compute_base_level, fold_levels, is_valid_classic, is_valid_remastered, max_virtue_increase,
    remaining_skill_ups_to_cap, required_raised_attributes, suggested_skill_ups,
    validate_classic, validate_remastered, virtue_cost,
};
pub use error::{ChoicesError, ErrorSeverity, LevelUpError, LevelingError, PlanError};
pub use plan::LevelingPlan;
pub use stats::{Attribute, AttributesSet, Skill, SkillsSet, attribute_of, skills_of};
pub use tables::{
    Ability, ActiveAbilities, Birthsign, Gender, LocationOrigin, Race, Specialization,
    VampiricStage,
};
