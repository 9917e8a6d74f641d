//! Permanent abilities that fortify skills.
//!
//! Abilities never enter the level history: they are an overlay applied to a
//! [`Level`](crate::engine::Level) for display via
//! [`Level::with_skill_modifiers`](crate::engine::Level::with_skill_modifiers).

use crate::stats::{Skill, SkillsSet};

/// A named ability granting flat skill bonuses.
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
pub enum Ability {
    #[strum(serialize = "Skeleton Key")]
    #[cfg_attr(feature = "serde", serde(rename = "Skeleton Key"))]
    SkeletonKey,
    #[strum(serialize = "Gray Prince's Training")]
    #[cfg_attr(feature = "serde", serde(rename = "Gray Prince's Training"))]
    GrayPrincesTraining,
    #[strum(serialize = "Night Mother's Blessing")]
    #[cfg_attr(feature = "serde", serde(rename = "Night Mother's Blessing"))]
    NightMothersBlessing,
    #[strum(serialize = "Vampirism (Stage 1)")]
    #[cfg_attr(feature = "serde", serde(rename = "Vampirism (Stage 1)"))]
    VampirismStage1,
    #[strum(serialize = "Vampirism (Stage 2)")]
    #[cfg_attr(feature = "serde", serde(rename = "Vampirism (Stage 2)"))]
    VampirismStage2,
    #[strum(serialize = "Vampirism (Stage 3)")]
    #[cfg_attr(feature = "serde", serde(rename = "Vampirism (Stage 3)"))]
    VampirismStage3,
    #[strum(serialize = "Vampirism (Stage 4)")]
    #[cfg_attr(feature = "serde", serde(rename = "Vampirism (Stage 4)"))]
    VampirismStage4,
    #[strum(serialize = "Dwemer Fireheart")]
    #[cfg_attr(feature = "serde", serde(rename = "Dwemer Fireheart"))]
    DwemerFireheart,
    #[strum(serialize = "Alchemical Brilliance")]
    #[cfg_attr(feature = "serde", serde(rename = "Alchemical Brilliance"))]
    AlchemicalBrilliance,
    #[strum(serialize = "Crusader's Arm (Sword)")]
    #[cfg_attr(feature = "serde", serde(rename = "Crusader's Arm (Sword)"))]
    CrusadersArmSword,
    #[strum(serialize = "Crusader's Arm (Mace)")]
    #[cfg_attr(feature = "serde", serde(rename = "Crusader's Arm (Mace)"))]
    CrusadersArmMace,
}

/// Skills fortified by every vampirism stage.
const VAMPIRIC_SKILLS: [Skill; 7] = [
    Skill::Acrobatics,
    Skill::Athletics,
    Skill::Destruction,
    Skill::HandToHand,
    Skill::Illusion,
    Skill::Mysticism,
    Skill::Sneak,
];

impl Ability {
    pub const COUNT: usize = 11;

    pub const fn all() -> [Ability; Self::COUNT] {
        use Ability::*;
        [
            SkeletonKey,
            GrayPrincesTraining,
            NightMothersBlessing,
            VampirismStage1,
            VampirismStage2,
            VampirismStage3,
            VampirismStage4,
            DwemerFireheart,
            AlchemicalBrilliance,
            CrusadersArmSword,
            CrusadersArmMace,
        ]
    }

    /// The vampirism stage this ability represents, if any.
    pub const fn vampiric_stage(self) -> Option<VampiricStage> {
        match self {
            Ability::VampirismStage1 => Some(VampiricStage::Stage1),
            Ability::VampirismStage2 => Some(VampiricStage::Stage2),
            Ability::VampirismStage3 => Some(VampiricStage::Stage3),
            Ability::VampirismStage4 => Some(VampiricStage::Stage4),
            _ => None,
        }
    }

    /// Skill bonuses granted while this ability is active.
    pub fn skill_modifiers(self) -> SkillsSet {
        if let Some(stage) = self.vampiric_stage() {
            let bonus = stage.skill_bonus();
            return SkillsSet::from_fn(|skill| {
                if VAMPIRIC_SKILLS.contains(&skill) {
                    bonus
                } else {
                    0
                }
            });
        }

        let pairs: &[(Skill, i32)] = match self {
            Ability::SkeletonKey => &[(Skill::Security, 40)],
            Ability::GrayPrincesTraining => {
                &[(Skill::Athletics, 3), (Skill::Blade, 3), (Skill::Block, 3)]
            }
            Ability::NightMothersBlessing => &[
                (Skill::Acrobatics, 2),
                (Skill::Blade, 2),
                (Skill::Marksman, 2),
                (Skill::Security, 2),
                (Skill::Sneak, 2),
            ],
            Ability::DwemerFireheart => &[(Skill::Armorer, 15)],
            Ability::AlchemicalBrilliance => &[(Skill::Alchemy, 15)],
            Ability::CrusadersArmSword => &[(Skill::Blade, 10)],
            Ability::CrusadersArmMace => &[(Skill::Blunt, 10)],
            _ => &[],
        };
        SkillsSet::from_pairs(pairs)
    }
}

/// Progression stage of vampirism.
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
pub enum VampiricStage {
    #[strum(serialize = "Stage 1")]
    #[cfg_attr(feature = "serde", serde(rename = "Stage 1"))]
    Stage1,
    #[strum(serialize = "Stage 2")]
    #[cfg_attr(feature = "serde", serde(rename = "Stage 2"))]
    Stage2,
    #[strum(serialize = "Stage 3")]
    #[cfg_attr(feature = "serde", serde(rename = "Stage 3"))]
    Stage3,
    #[strum(serialize = "Stage 4")]
    #[cfg_attr(feature = "serde", serde(rename = "Stage 4"))]
    Stage4,
}

impl VampiricStage {
    pub const fn all() -> [VampiricStage; 4] {
        [
            VampiricStage::Stage1,
            VampiricStage::Stage2,
            VampiricStage::Stage3,
            VampiricStage::Stage4,
        ]
    }

    pub const fn ability(self) -> Ability {
        match self {
            VampiricStage::Stage1 => Ability::VampirismStage1,
            VampiricStage::Stage2 => Ability::VampirismStage2,
            VampiricStage::Stage3 => Ability::VampirismStage3,
            VampiricStage::Stage4 => Ability::VampirismStage4,
        }
    }

    /// Bonus applied to each vampiric skill: 5 per stage.
    pub const fn skill_bonus(self) -> i32 {
        match self {
            VampiricStage::Stage1 => 5,
            VampiricStage::Stage2 => 10,
            VampiricStage::Stage3 => 15,
            VampiricStage::Stage4 => 20,
        }
    }
}

/// The set of abilities a character currently has.
///
/// At most one vampirism stage is active; enabling a stage replaces any
/// previous one. Iteration order is stable (sorted).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Ability>", into = "Vec<Ability>")
)]
pub struct ActiveAbilities {
    abilities: Vec<Ability>,
}

impl ActiveAbilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Ability> + '_ {
        self.abilities.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Enables `ability`. Returns `false` if it was already active.
    pub fn enable(&mut self, ability: Ability) -> bool {
        if self.contains(ability) {
            return false;
        }
        if ability.vampiric_stage().is_some() {
            self.abilities
                .retain(|active| active.vampiric_stage().is_none());
        }
        self.abilities.push(ability);
        self.abilities.sort_unstable();
        true
    }

    /// Disables `ability`. Returns `false` if it was not active.
    pub fn disable(&mut self, ability: Ability) -> bool {
        let before = self.abilities.len();
        self.abilities.retain(|active| *active != ability);
        before != self.abilities.len()
    }

    /// Flips `ability` on or off and returns whether it is now active.
    pub fn toggle(&mut self, ability: Ability) -> bool {
        if self.disable(ability) {
            false
        } else {
            self.enable(ability)
        }
    }

    /// Currently active vampirism stage.
    pub fn vampiric_stage(&self) -> Option<VampiricStage> {
        self.abilities.iter().find_map(|ability| ability.vampiric_stage())
    }

    /// Sets (or clears) the vampirism stage.
    pub fn set_vampiric_stage(&mut self, stage: Option<VampiricStage>) {
        self.abilities
            .retain(|active| active.vampiric_stage().is_none());
        if let Some(stage) = stage {
            self.enable(stage.ability());
        }
    }

    /// Summed skill bonuses of every active ability.
    pub fn skill_modifiers(&self) -> SkillsSet {
        self.abilities
            .iter()
            .fold(SkillsSet::zero(), |total, ability| {
                total + ability.skill_modifiers()
            })
    }
}

impl FromIterator<Ability> for ActiveAbilities {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        let mut active = Self::new();
        for ability in iter {
            active.enable(ability);
        }
        active
    }
}

impl From<Vec<Ability>> for ActiveAbilities {
    fn from(abilities: Vec<Ability>) -> Self {
        abilities.into_iter().collect()
    }
}

impl From<ActiveAbilities> for Vec<Ability> {
    fn from(active: ActiveAbilities) -> Self {
        active.abilities
    }
}
