//! Birthsigns and their starting bonuses.

use crate::stats::{Attribute, AttributesSet};

/// The constellation a character is born under.
///
/// Only some signs change leveling-relevant numbers: a flat magicka bonus
/// or attribute bonuses. Signs granting powers or spells have no entry here.
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
#[strum(ascii_case_insensitive)]
pub enum Birthsign {
    #[default]
    #[strum(serialize = "The Apprentice")]
    #[cfg_attr(feature = "serde", serde(rename = "The Apprentice"))]
    Apprentice,
    #[strum(serialize = "The Atronach")]
    #[cfg_attr(feature = "serde", serde(rename = "The Atronach"))]
    Atronach,
    #[strum(serialize = "The Lady")]
    #[cfg_attr(feature = "serde", serde(rename = "The Lady"))]
    Lady,
    #[strum(serialize = "The Lord")]
    #[cfg_attr(feature = "serde", serde(rename = "The Lord"))]
    Lord,
    #[strum(serialize = "The Lover")]
    #[cfg_attr(feature = "serde", serde(rename = "The Lover"))]
    Lover,
    #[strum(serialize = "The Mage")]
    #[cfg_attr(feature = "serde", serde(rename = "The Mage"))]
    Mage,
    #[strum(serialize = "The Ritual")]
    #[cfg_attr(feature = "serde", serde(rename = "The Ritual"))]
    Ritual,
    #[strum(serialize = "The Serpent")]
    #[cfg_attr(feature = "serde", serde(rename = "The Serpent"))]
    Serpent,
    #[strum(serialize = "The Shadow")]
    #[cfg_attr(feature = "serde", serde(rename = "The Shadow"))]
    Shadow,
    #[strum(serialize = "The Steed")]
    #[cfg_attr(feature = "serde", serde(rename = "The Steed"))]
    Steed,
    #[strum(serialize = "The Thief")]
    #[cfg_attr(feature = "serde", serde(rename = "The Thief"))]
    Thief,
    #[strum(serialize = "The Tower")]
    #[cfg_attr(feature = "serde", serde(rename = "The Tower"))]
    Tower,
    #[strum(serialize = "The Warrior")]
    #[cfg_attr(feature = "serde", serde(rename = "The Warrior"))]
    Warrior,
}

impl Birthsign {
    pub const COUNT: usize = 13;

    pub const fn all() -> [Birthsign; Self::COUNT] {
        [
            Birthsign::Apprentice,
            Birthsign::Atronach,
            Birthsign::Lady,
            Birthsign::Lord,
            Birthsign::Lover,
            Birthsign::Mage,
            Birthsign::Ritual,
            Birthsign::Serpent,
            Birthsign::Shadow,
            Birthsign::Steed,
            Birthsign::Thief,
            Birthsign::Tower,
            Birthsign::Warrior,
        ]
    }

    /// Attribute bonuses granted by this sign.
    pub fn attribute_modifiers(self) -> AttributesSet {
        let pairs: &[(Attribute, i32)] = match self {
            Birthsign::Lady => &[(Attribute::Willpower, 10), (Attribute::Endurance, 10)],
            Birthsign::Steed => &[(Attribute::Speed, 20)],
            Birthsign::Thief => &[
                (Attribute::Agility, 10),
                (Attribute::Luck, 10),
                (Attribute::Speed, 10),
            ],
            Birthsign::Warrior => &[(Attribute::Endurance, 10), (Attribute::Strength, 10)],
            _ => &[],
        };
        AttributesSet::from_pairs(pairs)
    }

    /// Flat magicka bonus; zero for signs without one.
    pub const fn magicka_bonus(self) -> i32 {
        match self {
            Birthsign::Apprentice => 100,
            Birthsign::Atronach => 150,
            Birthsign::Mage => 50,
            _ => 0,
        }
    }
}
