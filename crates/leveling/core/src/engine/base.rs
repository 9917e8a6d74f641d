//! Character creation: choices to the level 1 snapshot.

use crate::config::RulesConfig;
use crate::error::ChoicesError;
use crate::stats::{Attribute, AttributesSet, Skill, SkillsSet};
use crate::tables::{Birthsign, Gender, Race, Specialization};

use super::Level;

/// Everything picked on the character-creation screen.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterChoices {
    pub race: Race,
    pub gender: Gender,
    pub birthsign: Birthsign,
    pub specialization: Specialization,
    pub favored_attributes: Vec<Attribute>,
    pub major_skills: Vec<Skill>,
}

impl CharacterChoices {
    /// Checks the cardinality and distinctness of the favored attributes and
    /// major skills.
    ///
    /// [`compute_base_level`] does not call this: malformed choices only
    /// change the bonus totals.
    pub fn validate(&self) -> Result<(), ChoicesError> {
        if self.favored_attributes.len() != RulesConfig::NUM_FAVORED_ATTRIBUTES {
            return Err(ChoicesError::FavoredAttributeCount {
                expected: RulesConfig::NUM_FAVORED_ATTRIBUTES,
                actual: self.favored_attributes.len(),
            });
        }
        if let Some(duplicate) = first_duplicate(&self.favored_attributes) {
            return Err(ChoicesError::DuplicateFavoredAttribute(duplicate));
        }

        if self.major_skills.len() != RulesConfig::NUM_MAJOR_SKILLS {
            return Err(ChoicesError::MajorSkillCount {
                expected: RulesConfig::NUM_MAJOR_SKILLS,
                actual: self.major_skills.len(),
            });
        }
        if let Some(duplicate) = first_duplicate(&self.major_skills) {
            return Err(ChoicesError::DuplicateMajorSkill(duplicate));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn is_major(&self, skill: Skill) -> bool {
        self.major_skills.contains(&skill)
    }

    pub fn is_favored(&self, attribute: Attribute) -> bool {
        self.favored_attributes.contains(&attribute)
    }
}

fn first_duplicate<T: Copy + PartialEq>(items: &[T]) -> Option<T> {
    items
        .iter()
        .enumerate()
        .find(|(index, item)| items[..*index].contains(item))
        .map(|(_, item)| *item)
}

/// Computes the level 1 snapshot for `choices`.
///
/// Favored attributes and major skills are counted once per occurrence, so
/// duplicated entries stack their bonus.
pub fn compute_base_level(choices: &CharacterChoices, config: &RulesConfig) -> Level {
    let race_attributes = choices.race.attribute_modifiers(choices.gender);
    let sign_attributes = choices.birthsign.attribute_modifiers();
    let attributes = AttributesSet::from_fn(|attribute| {
        let favored = choices
            .favored_attributes
            .iter()
            .filter(|&&favored| favored == attribute)
            .count() as i32;

        RulesConfig::base_attribute(attribute)
            + race_attributes[attribute]
            + sign_attributes[attribute]
            + favored * RulesConfig::FAVORED_ATTRIBUTE_BONUS
    });

    let race_skills = choices.race.skill_modifiers();
    let skills = SkillsSet::from_fn(|skill| {
        let specialization = if choices.specialization.favors(skill) {
            RulesConfig::SPECIALIZATION_BONUS
        } else {
            0
        };
        let major = choices
            .major_skills
            .iter()
            .filter(|&&major| major == skill)
            .count() as i32;

        config.base_skill_level
            + race_skills[skill]
            + specialization
            + major * RulesConfig::MAJOR_SKILL_BONUS
    });

    let strength = attributes[Attribute::Strength];
    let intelligence = attributes[Attribute::Intelligence];
    let willpower = attributes[Attribute::Willpower];
    let agility = attributes[Attribute::Agility];
    let endurance = attributes[Attribute::Endurance];

    Level {
        level: 1,
        attributes,
        skills,
        health: endurance * RulesConfig::BASE_HEALTH_MULTIPLIER,
        magicka: intelligence * RulesConfig::MAGICKA_MULTIPLIER
            + choices.birthsign.magicka_bonus()
            + choices.race.magicka_bonus(),
        stamina: endurance + strength + agility + willpower,
        encumbrance: strength * RulesConfig::ENCUMBRANCE_MULTIPLIER,
    }
}
