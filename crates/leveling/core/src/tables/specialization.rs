//! Class specializations.

use crate::stats::Skill;

/// Class specialization; every skill in the specialization starts higher.
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
pub enum Specialization {
    #[default]
    Combat,
    Magic,
    Stealth,
}

impl Specialization {
    pub const fn all() -> [Specialization; 3] {
        [
            Specialization::Combat,
            Specialization::Magic,
            Specialization::Stealth,
        ]
    }

    /// Skills favored by this specialization.
    pub const fn skills(self) -> &'static [Skill] {
        use Skill::*;
        match self {
            Specialization::Combat => &[
                Armorer, Athletics, Blade, Block, Blunt, HandToHand, HeavyArmor,
            ],
            Specialization::Magic => &[
                Alchemy,
                Alteration,
                Conjuration,
                Destruction,
                Illusion,
                Mysticism,
                Restoration,
            ],
            Specialization::Stealth => &[
                Acrobatics,
                LightArmor,
                Marksman,
                Mercantile,
                Security,
                Sneak,
                Speechcraft,
            ],
        }
    }

    pub fn favors(self, skill: Skill) -> bool {
        self.skills().contains(&skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specializations_partition_skills() {
        for skill in Skill::all() {
            let owners = Specialization::all()
                .into_iter()
                .filter(|spec| spec.favors(skill))
                .count();
            assert_eq!(owners, 1, "{skill}");
        }
    }
}
