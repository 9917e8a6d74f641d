//! Level snapshots and level-up deltas.

use crate::stats::{Attribute, AttributesSet, Skill, SkillsSet};

/// Immutable snapshot of a character at one level.
///
/// Level 1 comes from [`compute_base_level`](super::compute_base_level);
/// every later level is produced by [`apply_level_up`](super::apply_level_up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub level: i32,
    pub attributes: AttributesSet,
    pub skills: SkillsSet,
    pub health: i32,
    pub magicka: i32,
    pub stamina: i32,
    pub encumbrance: i32,
}

impl Level {
    #[inline]
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes[attribute]
    }

    #[inline]
    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills[skill]
    }

    /// Number of attributes that can still be raised.
    pub fn attributes_below_cap(&self, cap: i32) -> usize {
        self.attributes.iter().filter(|&(_, value)| value < cap).count()
    }

    /// Copy of this level with `modifiers` added to its skills.
    ///
    /// Used to display ability bonuses; the result must not be fed back into
    /// the level history.
    #[must_use]
    pub fn with_skill_modifiers(&self, modifiers: &SkillsSet) -> Level {
        Level {
            skills: self.skills + *modifiers,
            ..*self
        }
    }
}

/// Delta describing one level transition.
///
/// `skills` holds the skill-ups gained since the previous level and
/// `attributes` the raise applied to each attribute. Both are sparse: zero
/// means unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelUp {
    pub skills: SkillsSet,
    pub attributes: AttributesSet,
}

impl LevelUp {
    pub fn new(skills: SkillsSet, attributes: AttributesSet) -> Self {
        Self { skills, attributes }
    }

    /// Adds `ups` skill-ups to `skill` (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, skill: Skill, ups: i32) -> Self {
        self.skills[skill] += ups;
        self
    }

    /// Raises `attribute` by `delta` (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute, delta: i32) -> Self {
        self.attributes[attribute] += delta;
        self
    }

    /// Attributes with a positive delta, in enumeration order.
    pub fn raised_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes
            .iter()
            .filter(|&(_, delta)| delta > 0)
            .map(|(attribute, _)| attribute)
    }

    /// Skill-ups gained across `skills`.
    pub fn skill_ups_in(&self, skills: &[Skill]) -> i32 {
        self.skills.total_of(skills)
    }
}
