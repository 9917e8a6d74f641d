//! The twenty-one trainable skills.

use super::attribute::Attribute;
use super::set::stat_set;

/// A trainable skill.
///
/// Every skill is governed by exactly one [`Attribute`]; the mapping is the
/// partition given by [`Attribute::skills`].
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
pub enum Skill {
    Acrobatics = 0,
    Alchemy = 1,
    Alteration = 2,
    Armorer = 3,
    Athletics = 4,
    Blade = 5,
    Block = 6,
    Blunt = 7,
    Conjuration = 8,
    Destruction = 9,
    #[strum(serialize = "Hand-to-Hand")]
    #[cfg_attr(feature = "serde", serde(rename = "Hand-to-Hand"))]
    HandToHand = 10,
    #[strum(serialize = "Heavy Armor")]
    #[cfg_attr(feature = "serde", serde(rename = "Heavy Armor"))]
    HeavyArmor = 11,
    Illusion = 12,
    #[strum(serialize = "Light Armor")]
    #[cfg_attr(feature = "serde", serde(rename = "Light Armor"))]
    LightArmor = 13,
    Marksman = 14,
    Mercantile = 15,
    Mysticism = 16,
    Restoration = 17,
    Security = 18,
    Sneak = 19,
    Speechcraft = 20,
}

impl Skill {
    /// Total number of skills.
    pub const COUNT: usize = 21;

    /// Returns all skills in alphabetical order.
    pub const fn all() -> [Skill; Self::COUNT] {
        [
            Skill::Acrobatics,
            Skill::Alchemy,
            Skill::Alteration,
            Skill::Armorer,
            Skill::Athletics,
            Skill::Blade,
            Skill::Block,
            Skill::Blunt,
            Skill::Conjuration,
            Skill::Destruction,
            Skill::HandToHand,
            Skill::HeavyArmor,
            Skill::Illusion,
            Skill::LightArmor,
            Skill::Marksman,
            Skill::Mercantile,
            Skill::Mysticism,
            Skill::Restoration,
            Skill::Security,
            Skill::Sneak,
            Skill::Speechcraft,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used in compact tables.
    pub const fn shorthand(self) -> &'static str {
        match self {
            Skill::Acrobatics => "ACR",
            Skill::Alchemy => "ALC",
            Skill::Alteration => "ALT",
            Skill::Armorer => "ARM",
            Skill::Athletics => "ATH",
            Skill::Blade => "BLD",
            Skill::Block => "BLK",
            Skill::Blunt => "BLT",
            Skill::Conjuration => "CON",
            Skill::Destruction => "DES",
            Skill::HandToHand => "H2H",
            Skill::HeavyArmor => "HAR",
            Skill::Illusion => "ILL",
            Skill::LightArmor => "LAR",
            Skill::Marksman => "MRK",
            Skill::Mercantile => "MRC",
            Skill::Mysticism => "MYS",
            Skill::Restoration => "RST",
            Skill::Security => "SEC",
            Skill::Sneak => "SNK",
            Skill::Speechcraft => "SPE",
        }
    }

    /// The attribute governing this skill.
    pub const fn attribute(self) -> Attribute {
        match self {
            Skill::Blade | Skill::Blunt | Skill::HandToHand => Attribute::Strength,
            Skill::Alchemy | Skill::Conjuration | Skill::Mysticism => Attribute::Intelligence,
            Skill::Alteration | Skill::Destruction | Skill::Restoration => Attribute::Willpower,
            Skill::Security | Skill::Sneak | Skill::Marksman => Attribute::Agility,
            Skill::Athletics | Skill::Acrobatics | Skill::LightArmor => Attribute::Speed,
            Skill::Armorer | Skill::Block | Skill::HeavyArmor => Attribute::Endurance,
            Skill::Mercantile | Skill::Speechcraft | Skill::Illusion => Attribute::Personality,
        }
    }
}

stat_set!(
    /// A value for every [`Skill`].
    ///
    /// Used both as an absolute snapshot and as a delta of skill-ups
    /// gained since the previous character level.
    SkillsSet,
    Skill,
    "skill"
);

impl SkillsSet {
    /// Sum of the entries for skills governed by `attribute`.
    pub fn total_for(&self, attribute: Attribute) -> i32 {
        self.total_of(attribute.skills())
    }
}

/// The attribute governing `skill`.
pub fn attribute_of(skill: Skill) -> Attribute {
    skill.attribute()
}
