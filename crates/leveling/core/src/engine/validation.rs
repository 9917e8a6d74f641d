//! Level-up validity gates.
//!
//! Each ruleset has a `validate_*` function that explains a rejection and an
//! `is_valid_*` predicate for check-before-commit callers. Neither is called by
//! [`apply_level_up`](super::apply_level_up).

use crate::config::RulesConfig;
use crate::error::LevelUpError;
use crate::stats::Skill;

use super::bonus::{max_virtue_increase, required_raised_attributes, virtue_cost};
use super::{Level, LevelUp};

/// Remastered virtue accounting for one level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VirtueLedger {
    /// Virtue points consumed by the attribute raises.
    pub spent: i32,
    pub budget: i32,
    /// Attributes with a positive delta.
    pub raised: usize,
    /// Raised attributes that reached their per-level maximum.
    pub maxed: usize,
    /// Raised attributes the level-up has to have.
    pub required: usize,
}

impl VirtueLedger {
    pub fn new(previous: &Level, level_up: &LevelUp) -> Self {
        let mut spent = 0;
        let mut raised = 0;
        let mut maxed = 0;
        for (attribute, delta) in level_up.attributes.iter() {
            if delta <= 0 {
                continue;
            }
            spent += virtue_cost(attribute, delta);
            raised += 1;
            if delta >= max_virtue_increase(attribute, previous.attributes[attribute]) {
                maxed += 1;
            }
        }

        Self {
            spent,
            budget: RulesConfig::VIRTUES_PER_LEVEL,
            raised,
            maxed,
            required: required_raised_attributes(previous),
        }
    }

    /// Virtue points left to spend; negative when over budget.
    pub fn remaining(&self) -> i32 {
        self.budget - self.spent
    }

    /// Whether leftover virtues are excused because every raise is maxed.
    pub fn capped_out(&self) -> bool {
        self.maxed == self.required
    }
}

fn check_deltas(previous: &Level, level_up: &LevelUp) -> Result<(), LevelUpError> {
    for (attribute, delta) in level_up.attributes.iter() {
        if delta < 0 {
            return Err(LevelUpError::NegativeDelta { attribute, delta });
        }
        let max = max_virtue_increase(attribute, previous.attributes[attribute]);
        if delta > max {
            return Err(LevelUpError::AttributeOverLimit {
                attribute,
                delta,
                max,
            });
        }
    }
    Ok(())
}

fn check_raised(previous: &Level, level_up: &LevelUp) -> Result<(), LevelUpError> {
    let expected = required_raised_attributes(previous);
    let actual = level_up.raised_attributes().count();
    if actual != expected {
        return Err(LevelUpError::RaisedAttributes { expected, actual });
    }
    Ok(())
}

/// Classic gate: exactly ten skill-ups across the major skills and the
/// required number of raised attributes.
pub fn validate_classic(
    previous: &Level,
    level_up: &LevelUp,
    major_skills: &[Skill],
) -> Result<(), LevelUpError> {
    check_deltas(previous, level_up)?;

    let actual = level_up.skill_ups_in(major_skills);
    if actual != RulesConfig::MAJOR_SKILL_UPS_PER_LEVEL {
        return Err(LevelUpError::MajorSkillUps {
            expected: RulesConfig::MAJOR_SKILL_UPS_PER_LEVEL,
            actual,
        });
    }

    check_raised(previous, level_up)
}

pub fn is_valid_classic(previous: &Level, level_up: &LevelUp, major_skills: &[Skill]) -> bool {
    validate_classic(previous, level_up, major_skills).is_ok()
}

/// Remastered gate: the required number of raised attributes, and the whole
/// virtue budget spent unless every raise already sits at its maximum.
pub fn validate_remastered(previous: &Level, level_up: &LevelUp) -> Result<(), LevelUpError> {
    check_deltas(previous, level_up)?;

    let ledger = VirtueLedger::new(previous, level_up);
    if ledger.spent > ledger.budget {
        return Err(LevelUpError::VirtueBudget {
            spent: ledger.spent,
            budget: ledger.budget,
        });
    }

    check_raised(previous, level_up)?;

    if ledger.spent < ledger.budget && !ledger.capped_out() {
        return Err(LevelUpError::UnderSpent {
            spent: ledger.spent,
            budget: ledger.budget,
        });
    }
    Ok(())
}

pub fn is_valid_remastered(previous: &Level, level_up: &LevelUp) -> bool {
    validate_remastered(previous, level_up).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Attribute, AttributesSet, SkillsSet};

    const MAJORS: [Skill; 7] = [
        Skill::Blade,
        Skill::Blunt,
        Skill::Armorer,
        Skill::Block,
        Skill::HeavyArmor,
        Skill::Athletics,
        Skill::HandToHand,
    ];

    fn level_at(value: i32) -> Level {
        Level {
            level: 2,
            attributes: AttributesSet::from_fn(|_| value),
            skills: SkillsSet::from_fn(|_| 30),
            health: 100,
            magicka: 80,
            stamina: 200,
            encumbrance: 300,
        }
    }

    fn classic_up() -> LevelUp {
        LevelUp::default()
            .with_skill(Skill::Blade, 6)
            .with_skill(Skill::Block, 4)
            .with_skill(Skill::Sneak, 3)
            .with_attribute(Attribute::Strength, 5)
            .with_attribute(Attribute::Endurance, 2)
            .with_attribute(Attribute::Agility, 2)
    }

    #[test]
    fn classic_accepts_ten_major_skill_ups() {
        assert_eq!(validate_classic(&level_at(50), &classic_up(), &MAJORS), Ok(()));
    }

    #[test]
    fn classic_counts_only_major_skills() {
        let level_up = classic_up().with_skill(Skill::Blade, -1);
        assert_eq!(
            validate_classic(&level_at(50), &level_up, &MAJORS),
            Err(LevelUpError::MajorSkillUps {
                expected: 10,
                actual: 9
            })
        );
    }

    #[test]
    fn classic_requires_three_raises() {
        let level_up = classic_up().with_attribute(Attribute::Speed, 1);
        assert_eq!(
            validate_classic(&level_at(50), &level_up, &MAJORS),
            Err(LevelUpError::RaisedAttributes {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn classic_allows_fewer_raises_near_cap() {
        let mut previous = level_at(100);
        previous.attributes[Attribute::Strength] = 90;
        previous.attributes[Attribute::Endurance] = 90;

        let level_up = LevelUp::default()
            .with_skill(Skill::Blade, 10)
            .with_attribute(Attribute::Strength, 5)
            .with_attribute(Attribute::Endurance, 1);
        assert!(is_valid_classic(&previous, &level_up, &MAJORS));
    }

    #[test]
    fn raise_past_cap_is_rejected() {
        let mut previous = level_at(50);
        previous.attributes[Attribute::Strength] = 98;
        assert_eq!(
            validate_classic(&previous, &classic_up(), &MAJORS),
            Err(LevelUpError::AttributeOverLimit {
                attribute: Attribute::Strength,
                delta: 5,
                max: 2
            })
        );
    }

    #[test]
    fn remastered_spends_full_budget() {
        let level_up = LevelUp::default()
            .with_attribute(Attribute::Strength, 5)
            .with_attribute(Attribute::Endurance, 5)
            .with_attribute(Attribute::Luck, 1);
        let ledger = VirtueLedger::new(&level_at(50), &level_up);

        assert_eq!(ledger.spent, 14);
        assert_eq!(ledger.remaining(), 0);
        assert_eq!(ledger.maxed, 3);
        assert!(is_valid_remastered(&level_at(50), &level_up));
    }

    #[test]
    fn remastered_rejects_under_spend() {
        let level_up = LevelUp::default()
            .with_attribute(Attribute::Strength, 5)
            .with_attribute(Attribute::Endurance, 4)
            .with_attribute(Attribute::Speed, 4);
        assert_eq!(
            validate_remastered(&level_at(50), &level_up),
            Err(LevelUpError::UnderSpent {
                spent: 13,
                budget: 14
            })
        );
    }

    #[test]
    fn remastered_rejects_over_budget() {
        let level_up = LevelUp::default()
            .with_attribute(Attribute::Strength, 5)
            .with_attribute(Attribute::Endurance, 5)
            .with_attribute(Attribute::Speed, 5);
        assert_eq!(
            validate_remastered(&level_at(50), &level_up),
            Err(LevelUpError::VirtueBudget {
                spent: 15,
                budget: 14
            })
        );
    }

    #[test]
    fn remastered_excuses_leftover_when_capped_out() {
        let mut previous = level_at(50);
        previous.attributes[Attribute::Speed] = 98;

        let level_up = LevelUp::default()
            .with_attribute(Attribute::Strength, 5)
            .with_attribute(Attribute::Endurance, 5)
            .with_attribute(Attribute::Speed, 2);
        let ledger = VirtueLedger::new(&previous, &level_up);

        assert_eq!(ledger.spent, 12);
        assert!(ledger.capped_out());
        assert_eq!(validate_remastered(&previous, &level_up), Ok(()));
    }

    #[test]
    fn negative_delta_is_rejected() {
        let level_up = LevelUp::default().with_attribute(Attribute::Willpower, -1);
        assert_eq!(
            validate_remastered(&level_at(50), &level_up),
            Err(LevelUpError::NegativeDelta {
                attribute: Attribute::Willpower,
                delta: -1
            })
        );
    }

    fn two_below_cap() -> Level {
        let mut previous = level_at(100);
        previous.attributes[Attribute::Strength] = 97;
        previous.attributes[Attribute::Endurance] = 98;
        previous
    }

    #[test]
    fn remastered_near_cap_requires_fewer_raises() {
        let previous = two_below_cap();
        let level_up = LevelUp::default()
            .with_attribute(Attribute::Strength, 3)
            .with_attribute(Attribute::Endurance, 2);
        let ledger = VirtueLedger::new(&previous, &level_up);

        assert_eq!(ledger.required, 2);
        assert_eq!(ledger.spent, 5);
        assert!(ledger.capped_out());
        assert_eq!(validate_remastered(&previous, &level_up), Ok(()));
    }

    #[test]
    fn remastered_near_cap_still_needs_every_open_attribute() {
        let level_up = LevelUp::default().with_attribute(Attribute::Strength, 3);
        assert_eq!(
            validate_remastered(&two_below_cap(), &level_up),
            Err(LevelUpError::RaisedAttributes {
                expected: 2,
                actual: 1
            })
        );
    }
}
