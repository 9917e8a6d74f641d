//! Closed enumerations and the total mappings built on them.
//!
//! ```text
//! Attribute (8) ──governs──▶ Skill (21)
//!      │                        │
//! AttributesSet             SkillsSet
//! ```
//!
//! Sets double as absolute snapshots and as deltas.

pub mod attribute;
pub(crate) mod set;
pub mod skill;

pub use attribute::{Attribute, AttributesSet, skills_of};
pub use skill::{Skill, SkillsSet, attribute_of};
