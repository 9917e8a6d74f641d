//! The leveling engine.
//!
//! ```text
//! CharacterChoices ──compute_base_level──▶ Level 1
//!                                            │ apply_level_up(LevelUp, Ruleset)
//!                                            ▼
//!                                          Level 2 ─▶ ...
//! ```
//!
//! Everything here is a pure function of its arguments and the reference
//! tables. The validity gates in [`validation`] are separate: the engine
//! applies whatever it is given.

pub mod base;
pub mod bonus;
pub mod level;
pub mod ruleset;
pub mod validation;

pub use base::{CharacterChoices, compute_base_level};
pub use bonus::{
    attribute_bonus_from_skill_ups, classic_attribute_deltas, classic_level_up,
    max_virtue_increase, remaining_skill_ups_to_cap, required_raised_attributes,
    suggested_skill_ups, virtue_cost,
};
pub use level::{Level, LevelUp};
pub use ruleset::{Ruleset, apply_level_up, fold_levels};
pub use validation::{
    VirtueLedger, is_valid_classic, is_valid_remastered, validate_classic, validate_remastered,
};
