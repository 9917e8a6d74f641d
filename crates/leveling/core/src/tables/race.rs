//! Playable races, genders and race-specific modifiers.

use crate::stats::{Attribute, AttributesSet, Skill, SkillsSet};

/// Character gender. Selects which attribute column of a race applies.
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
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }
}

/// A playable race.
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
pub enum Race {
    #[default]
    Altmer,
    Argonian,
    Bosmer,
    Breton,
    Dunmer,
    Imperial,
    Khajiit,
    Nord,
    Orc,
    Redguard,
}

impl Race {
    pub const COUNT: usize = 10;

    pub const fn all() -> [Race; Self::COUNT] {
        [
            Race::Altmer,
            Race::Argonian,
            Race::Bosmer,
            Race::Breton,
            Race::Dunmer,
            Race::Imperial,
            Race::Khajiit,
            Race::Nord,
            Race::Orc,
            Race::Redguard,
        ]
    }

    /// Attribute modifiers for this race and gender.
    pub fn attribute_modifiers(self, gender: Gender) -> AttributesSet {
        use Attribute::*;

        let pairs: &[(Attribute, i32)] = match (self, gender) {
            (Race::Altmer, Gender::Male) => &[(Strength, -10), (Intelligence, 10), (Speed, -10)],
            (Race::Altmer, Gender::Female) => {
                &[(Strength, -10), (Intelligence, 10), (Endurance, -10)]
            }
            (Race::Argonian, Gender::Male) => &[
                (Willpower, -10),
                (Agility, 10),
                (Speed, 10),
                (Endurance, -10),
                (Personality, -10),
            ],
            (Race::Argonian, Gender::Female) => {
                &[(Intelligence, 10), (Endurance, -10), (Personality, -10)]
            }
            (Race::Bosmer, Gender::Male) => &[
                (Strength, -10),
                (Willpower, -10),
                (Agility, 10),
                (Speed, 10),
                (Personality, -10),
            ],
            (Race::Bosmer, Gender::Female) => &[
                (Strength, -10),
                (Willpower, -10),
                (Agility, 10),
                (Speed, 10),
                (Endurance, -10),
            ],
            (Race::Breton, Gender::Male) => &[
                (Intelligence, 10),
                (Willpower, 10),
                (Agility, -10),
                (Speed, -10),
                (Endurance, -10),
            ],
            (Race::Breton, Gender::Female) => &[
                (Strength, -10),
                (Intelligence, 10),
                (Willpower, 10),
                (Agility, -10),
                (Endurance, -10),
            ],
            (Race::Dunmer, Gender::Male) => &[(Willpower, -10), (Speed, 10), (Personality, -10)],
            (Race::Dunmer, Gender::Female) => &[(Willpower, -10), (Speed, 10), (Endurance, -10)],
            (Race::Imperial, Gender::Male) => {
                &[(Agility, -10), (Personality, 10), (Willpower, -10)]
            }
            (Race::Imperial, Gender::Female) => &[(Agility, -10), (Personality, 10), (Speed, -10)],
            (Race::Khajiit, Gender::Male) => &[(Willpower, -10), (Agility, 10), (Endurance, -10)],
            (Race::Khajiit, Gender::Female) => &[(Strength, -10), (Willpower, -10), (Agility, 10)],
            (Race::Nord, Gender::Male) | (Race::Redguard, Gender::Male) => &[
                (Strength, 10),
                (Intelligence, -10),
                (Willpower, -10),
                (Endurance, 10),
                (Personality, -10),
            ],
            (Race::Nord, Gender::Female) => {
                &[(Strength, 10), (Intelligence, -10), (Personality, -10)]
            }
            (Race::Orc, Gender::Male) => &[
                (Strength, 5),
                (Intelligence, -10),
                (Willpower, 10),
                (Agility, -5),
                (Speed, -10),
                (Endurance, 10),
                (Personality, -10),
            ],
            (Race::Orc, Gender::Female) => &[
                (Strength, 5),
                (Willpower, 5),
                (Agility, -5),
                (Speed, -10),
                (Endurance, 10),
                (Personality, -15),
            ],
            (Race::Redguard, Gender::Female) => {
                &[(Intelligence, -10), (Willpower, -10), (Endurance, 10)]
            }
        };

        AttributesSet::from_pairs(pairs)
    }

    /// Starting skill bonuses granted by this race.
    pub fn skill_modifiers(self) -> SkillsSet {
        use Skill::*;

        let pairs: &[(Skill, i32)] = match self {
            Race::Altmer => &[
                (Alchemy, 5),
                (Alteration, 10),
                (Conjuration, 5),
                (Destruction, 10),
                (Illusion, 5),
                (Mysticism, 10),
            ],
            Race::Argonian => &[
                (Alchemy, 5),
                (Athletics, 10),
                (Blade, 5),
                (HandToHand, 5),
                (Illusion, 5),
                (Mysticism, 5),
                (Security, 10),
            ],
            Race::Bosmer => &[
                (Acrobatics, 5),
                (Alchemy, 10),
                (Alteration, 5),
                (LightArmor, 5),
                (Marksman, 10),
                (Sneak, 10),
            ],
            Race::Breton => &[
                (Alchemy, 5),
                (Alteration, 5),
                (Conjuration, 10),
                (Illusion, 5),
                (Mysticism, 10),
                (Restoration, 10),
            ],
            Race::Dunmer => &[
                (Athletics, 5),
                (Blade, 10),
                (Blunt, 5),
                (Destruction, 10),
                (LightArmor, 5),
                (Marksman, 5),
                (Mysticism, 5),
            ],
            Race::Imperial => &[
                (Blade, 5),
                (Blunt, 5),
                (HandToHand, 5),
                (HeavyArmor, 10),
                (Mercantile, 10),
                (Speechcraft, 10),
            ],
            Race::Khajiit => &[
                (Acrobatics, 10),
                (Athletics, 5),
                (Blade, 5),
                (HandToHand, 10),
                (LightArmor, 5),
                (Security, 5),
                (Sneak, 5),
            ],
            Race::Nord => &[
                (Armorer, 5),
                (Blade, 10),
                (Block, 5),
                (Blunt, 10),
                (HeavyArmor, 10),
                (Restoration, 5),
            ],
            Race::Orc => &[
                (Armorer, 10),
                (Block, 10),
                (Blunt, 10),
                (HandToHand, 5),
                (HeavyArmor, 10),
            ],
            Race::Redguard => &[
                (Athletics, 10),
                (Blade, 10),
                (Blunt, 10),
                (HeavyArmor, 5),
                (LightArmor, 5),
                (Mercantile, 5),
            ],
        };

        SkillsSet::from_pairs(pairs)
    }

    /// Flat magicka bonus; zero for races without one.
    pub const fn magicka_bonus(self) -> i32 {
        match self {
            Race::Altmer => 100,
            Race::Breton => 50,
            _ => 0,
        }
    }
}

/// Homeland chosen during remastered character creation.
///
/// Origins come in pairs per race; each origin fixes the character's gender.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum LocationOrigin {
    Arnesia,
    Thornmarsh,
    Systres,
    #[strum(serialize = "High Rock")]
    #[cfg_attr(feature = "serde", serde(rename = "High Rock"))]
    HighRock,
    Vvardenfell,
    Mainland,
    Auridon,
    #[strum(serialize = "Summerset Isle")]
    #[cfg_attr(feature = "serde", serde(rename = "Summerset Isle"))]
    SummersetIsle,
    Nibenay,
    Colovia,
    Anequina,
    Pellitine,
    Western,
    Eastern,
    Stronghold,
    Orsinium,
    #[strum(serialize = "Dragontail Mountains")]
    #[cfg_attr(feature = "serde", serde(rename = "Dragontail Mountains"))]
    DragontailMountains,
    #[strum(serialize = "Alik'r Desert")]
    #[cfg_attr(feature = "serde", serde(rename = "Alik'r Desert"))]
    AlikrDesert,
    Grahtwood,
    #[strum(serialize = "Reaper's March")]
    #[cfg_attr(feature = "serde", serde(rename = "Reaper's March"))]
    ReapersMarch,
}

impl LocationOrigin {
    pub const COUNT: usize = 20;

    pub const fn all() -> [LocationOrigin; Self::COUNT] {
        use LocationOrigin::*;
        [
            Arnesia,
            Thornmarsh,
            Systres,
            HighRock,
            Vvardenfell,
            Mainland,
            Auridon,
            SummersetIsle,
            Nibenay,
            Colovia,
            Anequina,
            Pellitine,
            Western,
            Eastern,
            Stronghold,
            Orsinium,
            DragontailMountains,
            AlikrDesert,
            Grahtwood,
            ReapersMarch,
        ]
    }

    /// The gender implied by this origin.
    pub const fn gender(self) -> Gender {
        use LocationOrigin::*;
        match self {
            Arnesia | Systres | Vvardenfell | Auridon | Nibenay | Anequina | Western
            | Stronghold | DragontailMountains | Grahtwood => Gender::Male,
            Thornmarsh | HighRock | Mainland | SummersetIsle | Colovia | Pellitine | Eastern
            | Orsinium | AlikrDesert | ReapersMarch => Gender::Female,
        }
    }
}

impl From<LocationOrigin> for Gender {
    fn from(origin: LocationOrigin) -> Self {
        origin.gender()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redguard_male_modifiers() {
        let modifiers = Race::Redguard.attribute_modifiers(Gender::Male);
        assert_eq!(modifiers[Attribute::Strength], 10);
        assert_eq!(modifiers[Attribute::Endurance], 10);
        assert_eq!(modifiers[Attribute::Intelligence], -10);
        assert_eq!(modifiers[Attribute::Luck], 0);
    }

    #[test]
    fn race_attribute_modifiers_are_balanced_or_penalised() {
        // No race comes out ahead in raw attribute points.
        for race in Race::all() {
            for gender in Gender::all() {
                let total = race.attribute_modifiers(gender).total();
                assert!(total <= 0, "{race} {gender} totals {total}");
                assert_eq!(
                    race.attribute_modifiers(gender)[Attribute::Luck],
                    0,
                    "{race} {gender}"
                );
            }
        }
    }

    #[test]
    fn only_altmer_and_breton_have_magicka_bonus() {
        for race in Race::all() {
            let expected = match race {
                Race::Altmer => 100,
                Race::Breton => 50,
                _ => 0,
            };
            assert_eq!(race.magicka_bonus(), expected);
        }
    }

    #[test]
    fn origins_split_evenly_by_gender() {
        let male = LocationOrigin::all()
            .into_iter()
            .filter(|origin| origin.gender() == Gender::Male)
            .count();
        assert_eq!(male, LocationOrigin::COUNT / 2);
        assert_eq!(Gender::from(LocationOrigin::AlikrDesert), Gender::Female);
        assert_eq!(
            "Reaper's March".parse::<LocationOrigin>().unwrap(),
            LocationOrigin::ReapersMarch
        );
    }
}
