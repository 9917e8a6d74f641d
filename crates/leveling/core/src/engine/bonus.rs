//! Helpers that turn skill-ups into attribute raises.
//!
//! These are what an editor calls while the user builds a [`LevelUp`]; the
//! engine itself never calls them.

use crate::config::RulesConfig;
use crate::stats::{Attribute, AttributesSet, Skill, SkillsSet};

use super::{Level, LevelUp};

/// Attribute bonus earned by `skill_ups` skill-ups in the attribute's
/// governed skills, clamped so `current + bonus` stays within the cap.
///
/// | skill-ups | bonus |
/// |-----------|-------|
/// | 0         | 1     |
/// | 1..=4     | 2     |
/// | 5..=7     | 3     |
/// | 8..=9     | 4     |
/// | 10+       | 5     |
pub fn attribute_bonus_from_skill_ups(skill_ups: i32, current: i32) -> i32 {
    let bonus = match skill_ups {
        i32::MIN..=0 => 1,
        1..=4 => 2,
        5..=7 => 3,
        8..=9 => 4,
        _ => 5,
    };
    let headroom = (RulesConfig::MAX_ATTRIBUTE_LEVEL - current).max(0);
    bonus.min(headroom)
}

/// Skill-ups still needed in `attribute`'s skills before it is capped.
///
/// Display only; nothing gates on this value.
pub fn remaining_skill_ups_to_cap(attribute: Attribute, current: i32) -> i32 {
    let headroom = (RulesConfig::MAX_ATTRIBUTE_LEVEL - current).max(0);
    headroom * RulesConfig::SKILL_UPS_FOR_MAX_ATTRIBUTE_BONUS / attribute.max_bonus_per_level()
}

/// Attribute deltas for a classic level-up.
///
/// Each attribute in `raised` gets the bonus earned by the skill-ups of its
/// governed skills; every other attribute stays at zero. Luck has no skills
/// and always earns the base bonus of 1.
pub fn classic_attribute_deltas(
    previous: &Level,
    skill_ups: &SkillsSet,
    raised: &[Attribute],
) -> AttributesSet {
    let mut deltas = AttributesSet::zero();
    for &attribute in raised {
        deltas[attribute] =
            attribute_bonus_from_skill_ups(skill_ups.total_for(attribute), previous.attributes[attribute]);
    }
    deltas
}

/// Builds a classic [`LevelUp`] from skill-ups and the attributes to raise.
pub fn classic_level_up(previous: &Level, skill_ups: SkillsSet, raised: &[Attribute]) -> LevelUp {
    let attributes = classic_attribute_deltas(previous, &skill_ups, raised);
    LevelUp::new(skill_ups, attributes)
}

/// Default skill-ups applied when `skill` is first picked for a level-up.
pub fn suggested_skill_ups(previous: &Level, skill: Skill) -> i32 {
    (RulesConfig::MAX_SKILL_LEVEL - previous.skills[skill])
        .clamp(0, RulesConfig::MAJOR_SKILL_UPS_PER_LEVEL)
}

/// Number of attributes a level-up must raise from `previous`.
pub fn required_raised_attributes(previous: &Level) -> usize {
    previous
        .attributes_below_cap(RulesConfig::MAX_ATTRIBUTE_LEVEL)
        .min(RulesConfig::NUM_RAISED_ATTRIBUTES)
}

/// Largest raise a remastered level-up may give `attribute` at `current`.
pub fn max_virtue_increase(attribute: Attribute, current: i32) -> i32 {
    let headroom = (RulesConfig::MAX_ATTRIBUTE_LEVEL - current).max(0);
    attribute.max_bonus_per_level().min(headroom)
}

/// Virtue points a raise of `delta` costs.
pub const fn virtue_cost(attribute: Attribute, delta: i32) -> i32 {
    match attribute {
        Attribute::Luck => delta * RulesConfig::VIRTUES_PER_LUCK,
        _ => delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_at(value: i32) -> Level {
        Level {
            level: 1,
            attributes: AttributesSet::from_fn(|_| value),
            skills: SkillsSet::from_fn(|_| value),
            health: 0,
            magicka: 0,
            stamina: 0,
            encumbrance: 0,
        }
    }

    #[test]
    fn step_function_boundaries() {
        assert_eq!(attribute_bonus_from_skill_ups(0, 50), 1);
        assert_eq!(attribute_bonus_from_skill_ups(1, 50), 2);
        assert_eq!(attribute_bonus_from_skill_ups(4, 50), 2);
        assert_eq!(attribute_bonus_from_skill_ups(5, 50), 3);
        assert_eq!(attribute_bonus_from_skill_ups(7, 50), 3);
        assert_eq!(attribute_bonus_from_skill_ups(8, 50), 4);
        assert_eq!(attribute_bonus_from_skill_ups(9, 50), 4);
        assert_eq!(attribute_bonus_from_skill_ups(10, 50), 5);
        assert_eq!(attribute_bonus_from_skill_ups(25, 50), 5);
    }

    #[test]
    fn step_function_clamps_to_cap() {
        assert_eq!(attribute_bonus_from_skill_ups(10, 98), 2);
        assert_eq!(attribute_bonus_from_skill_ups(0, 100), 0);
        assert_eq!(attribute_bonus_from_skill_ups(10, 105), 0);
    }

    #[test]
    fn step_function_is_monotone() {
        for current in 0..=100 {
            for ups in 0..20 {
                assert!(
                    attribute_bonus_from_skill_ups(ups, current)
                        <= attribute_bonus_from_skill_ups(ups + 1, current)
                );
            }
        }
        for ups in 0..20 {
            for current in 0..100 {
                assert!(
                    attribute_bonus_from_skill_ups(ups, current + 1)
                        <= attribute_bonus_from_skill_ups(ups, current)
                );
            }
        }
    }

    #[test]
    fn remaining_skill_ups() {
        assert_eq!(remaining_skill_ups_to_cap(Attribute::Strength, 65), 70);
        assert_eq!(remaining_skill_ups_to_cap(Attribute::Strength, 100), 0);
        assert_eq!(remaining_skill_ups_to_cap(Attribute::Luck, 50), 500);
    }

    #[test]
    fn classic_deltas_follow_governed_skills() {
        let previous = level_at(50);
        let skill_ups = SkillsSet::zero()
            .with(Skill::Blade, 6)
            .with(Skill::Blunt, 4)
            .with(Skill::Armorer, 3);
        let deltas = classic_attribute_deltas(
            &previous,
            &skill_ups,
            &[Attribute::Strength, Attribute::Endurance, Attribute::Luck],
        );

        assert_eq!(deltas[Attribute::Strength], 5);
        assert_eq!(deltas[Attribute::Endurance], 2);
        assert_eq!(deltas[Attribute::Luck], 1);
        assert_eq!(deltas[Attribute::Speed], 0);
    }

    #[test]
    fn suggested_skill_ups_respect_cap() {
        assert_eq!(suggested_skill_ups(&level_at(40), Skill::Blade), 10);
        assert_eq!(suggested_skill_ups(&level_at(96), Skill::Blade), 4);
        assert_eq!(suggested_skill_ups(&level_at(100), Skill::Blade), 0);
    }

    #[test]
    fn required_raises_drop_near_cap() {
        let mut level = level_at(60);
        assert_eq!(required_raised_attributes(&level), 3);

        for attribute in Attribute::all().into_iter().skip(2) {
            level.attributes[attribute] = 100;
        }
        assert_eq!(required_raised_attributes(&level), 2);
    }

    #[test]
    fn virtue_limits() {
        assert_eq!(max_virtue_increase(Attribute::Speed, 50), 5);
        assert_eq!(max_virtue_increase(Attribute::Speed, 97), 3);
        assert_eq!(max_virtue_increase(Attribute::Luck, 50), 1);
        assert_eq!(max_virtue_increase(Attribute::Luck, 100), 0);
        assert_eq!(virtue_cost(Attribute::Luck, 1), 4);
        assert_eq!(virtue_cost(Attribute::Willpower, 5), 5);
    }
}
