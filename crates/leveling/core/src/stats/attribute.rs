//! The eight primary attributes and their governed skills.

use crate::config::RulesConfig;

use super::set::stat_set;
use super::skill::Skill;

/// A primary character attribute.
///
/// Each attribute governs up to three skills (Luck governs none). Raising
/// those skills during a level drives how much the attribute can be raised
/// at the next level-up under the classic ruleset.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Attribute {
    Strength = 0,
    Intelligence = 1,
    Willpower = 2,
    Agility = 3,
    Speed = 4,
    Endurance = 5,
    Personality = 6,
    Luck = 7,
}

impl Attribute {
    /// Total number of attributes.
    pub const COUNT: usize = 8;

    /// Returns all attributes in display order.
    pub const fn all() -> [Attribute; Self::COUNT] {
        [
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::Willpower,
            Attribute::Agility,
            Attribute::Speed,
            Attribute::Endurance,
            Attribute::Personality,
            Attribute::Luck,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used in compact tables.
    pub const fn shorthand(self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Intelligence => "INT",
            Attribute::Willpower => "WIL",
            Attribute::Agility => "AGL",
            Attribute::Speed => "SPD",
            Attribute::Endurance => "END",
            Attribute::Personality => "PER",
            Attribute::Luck => "LCK",
        }
    }

    /// Parses a three-letter abbreviation (case-insensitive).
    pub fn from_shorthand(shorthand: &str) -> Option<Attribute> {
        Self::all()
            .into_iter()
            .find(|attribute| attribute.shorthand().eq_ignore_ascii_case(shorthand))
    }

    /// Skills governed by this attribute, in table order.
    pub const fn skills(self) -> &'static [Skill] {
        match self {
            Attribute::Strength => &[Skill::Blade, Skill::Blunt, Skill::HandToHand],
            Attribute::Intelligence => &[Skill::Alchemy, Skill::Conjuration, Skill::Mysticism],
            Attribute::Willpower => &[Skill::Alteration, Skill::Destruction, Skill::Restoration],
            Attribute::Agility => &[Skill::Security, Skill::Sneak, Skill::Marksman],
            Attribute::Speed => &[Skill::Athletics, Skill::Acrobatics, Skill::LightArmor],
            Attribute::Endurance => &[Skill::Armorer, Skill::Block, Skill::HeavyArmor],
            Attribute::Personality => &[Skill::Mercantile, Skill::Speechcraft, Skill::Illusion],
            Attribute::Luck => &[],
        }
    }

    /// Largest raise a single level-up may apply to this attribute.
    ///
    /// Luck rises one point at a time under the remastered virtue scheme.
    pub const fn max_bonus_per_level(self) -> i32 {
        match self {
            Attribute::Luck => 1,
            _ => RulesConfig::MAX_VIRTUES_PER_ATTRIBUTE,
        }
    }
}

stat_set!(
    /// A value for every [`Attribute`].
    ///
    /// Used both as an absolute snapshot and as a level-up delta
    /// (an "attributes modifier", where zero means unchanged).
    AttributesSet,
    Attribute,
    "attribute"
);

/// Skills governed by `attribute`.
pub fn skills_of(attribute: Attribute) -> &'static [Skill] {
    attribute.skills()
}
