use leveling_core::{
    Attribute, AttributesSet, Birthsign, CharacterChoices, Gender, Level, LevelUp, LevelingPlan,
    Race, Ruleset, RulesConfig, Skill, SkillsSet, Specialization, apply_level_up,
    attribute_bonus_from_skill_ups, attribute_of, classic_level_up, compute_base_level,
    is_valid_classic, skills_of,
};

fn redguard_warrior() -> CharacterChoices {
    CharacterChoices {
        race: Race::Redguard,
        gender: Gender::Male,
        birthsign: Birthsign::Warrior,
        specialization: Specialization::Combat,
        favored_attributes: vec![Attribute::Strength, Attribute::Endurance],
        major_skills: vec![
            Skill::Blade,
            Skill::Blunt,
            Skill::Armorer,
            Skill::Block,
            Skill::HeavyArmor,
            Skill::Athletics,
            Skill::HandToHand,
        ],
    }
}

fn every_choice() -> impl Iterator<Item = CharacterChoices> {
    Race::all().into_iter().flat_map(|race| {
        Gender::all().into_iter().flat_map(move |gender| {
            Birthsign::all().into_iter().map(move |birthsign| CharacterChoices {
                race,
                gender,
                birthsign,
                ..redguard_warrior()
            })
        })
    })
}

fn mixed_level_up() -> LevelUp {
    LevelUp::default()
        .with_skill(Skill::Blade, 4)
        .with_skill(Skill::Armorer, 6)
        .with_skill(Skill::Sneak, 2)
        .with_attribute(Attribute::Strength, 2)
        .with_attribute(Attribute::Endurance, 4)
        .with_attribute(Attribute::Luck, 1)
}

#[test]
fn character_creation_scenario() {
    let level = compute_base_level(&redguard_warrior(), &RulesConfig::default());

    // 40 base + 10 race + 10 birthsign + 5 favored
    assert_eq!(level.attribute(Attribute::Strength), 65);
    assert_eq!(level.attribute(Attribute::Endurance), 65);
    assert_eq!(level.health, 130);
    assert_eq!(level.encumbrance, 325);
    assert_eq!(level.level, 1);
}

#[test]
fn classic_level_up_scenario() {
    let base = compute_base_level(&redguard_warrior(), &RulesConfig::default());
    let level_up = LevelUp::default().with_attribute(Attribute::Endurance, 5);

    let next = apply_level_up(&base, &level_up, Ruleset::Classic);
    assert_eq!(next.health, 130 + 5 * 2 + 70 / 10);
    assert_eq!(next.health, 147);
}

#[test]
fn health_diverges_by_ruleset() {
    let base = compute_base_level(&redguard_warrior(), &RulesConfig::default());
    let previous = Level {
        level: 5,
        health: 80,
        ..base
    };
    let level_up = LevelUp::default()
        .with_attribute(Attribute::Endurance, 3)
        .with_attribute(Attribute::Strength, 2);

    let classic = apply_level_up(&previous, &level_up, Ruleset::Classic);
    let remastered = apply_level_up(&previous, &level_up, Ruleset::Remastered);

    assert_eq!(classic.health, 80 + 3 * 2 + (65 + 3) / 10);
    assert_eq!(remastered.health, 6);
    assert_ne!(classic.health, remastered.health);
}

#[test]
fn level_ups_are_additive_for_every_build() {
    let level_up = mixed_level_up();
    for choices in every_choice() {
        let base = compute_base_level(&choices, &RulesConfig::default());
        for ruleset in Ruleset::all() {
            let next = apply_level_up(&base, &level_up, ruleset);

            assert_eq!(next.level, base.level + 1);
            for attribute in Attribute::all() {
                assert_eq!(
                    next.attributes[attribute],
                    base.attributes[attribute] + level_up.attributes[attribute]
                );
            }
            for skill in Skill::all() {
                assert_eq!(next.skills[skill], base.skills[skill] + level_up.skills[skill]);
            }
        }
    }
}

#[test]
fn base_level_is_deterministic() {
    let config = RulesConfig::default();
    for choices in every_choice() {
        assert_eq!(
            compute_base_level(&choices, &config),
            compute_base_level(&choices.clone(), &config)
        );
    }
}

#[test]
fn base_level_values_stay_in_range() {
    let config = RulesConfig::default();
    for choices in every_choice() {
        let level = compute_base_level(&choices, &config);
        assert!(level.attributes.iter().all(|(_, value)| (0..=100).contains(&value)));
        assert!(level.skills.iter().all(|(_, value)| (0..=100).contains(&value)));
        assert!(level.health > 0 && level.magicka > 0);
        assert!(level.stamina > 0 && level.encumbrance > 0);
    }
}

#[test]
fn every_skill_has_one_attribute() {
    for skill in Skill::all() {
        let attribute = attribute_of(skill);
        assert!(skills_of(attribute).contains(&skill), "{skill}");

        let owners = Attribute::all()
            .into_iter()
            .filter(|attribute| skills_of(*attribute).contains(&skill))
            .count();
        assert_eq!(owners, 1, "{skill}");
    }
    assert!(skills_of(Attribute::Luck).is_empty());
}

#[test]
fn bonus_step_boundaries() {
    assert_eq!(attribute_bonus_from_skill_ups(0, 50), 1);
    assert_eq!(attribute_bonus_from_skill_ups(4, 50), 2);
    assert_eq!(attribute_bonus_from_skill_ups(5, 50), 3);
    assert_eq!(attribute_bonus_from_skill_ups(10, 50), 5);
    assert_eq!(attribute_bonus_from_skill_ups(10, 98), 2);
}

#[test]
fn over_cap_level_up_is_applied_as_given() {
    let previous = Level {
        level: 20,
        attributes: AttributesSet::from_fn(|_| 99),
        skills: SkillsSet::from_fn(|_| 99),
        health: 300,
        magicka: 200,
        stamina: 396,
        encumbrance: 495,
    };
    let level_up = LevelUp::default()
        .with_attribute(Attribute::Strength, 5)
        .with_skill(Skill::Blade, 10);

    let next = apply_level_up(&previous, &level_up, Ruleset::Classic);
    assert_eq!(next.attribute(Attribute::Strength), 104);
    assert_eq!(next.skill(Skill::Blade), 109);
}

#[test]
fn planned_classic_run_stays_within_caps() {
    let mut plan = LevelingPlan::new(redguard_warrior(), RulesConfig::default());

    // Alternate the ten major skill-ups between Strength and Endurance skills
    // and raise the pair plus Luck, backfilling once Strength or Endurance caps.
    for round in 0..14 {
        let current = plan.current_level();
        let skill_ups = if round % 2 == 0 {
            SkillsSet::zero().with(Skill::Blade, 5).with(Skill::Blunt, 5)
        } else {
            SkillsSet::zero().with(Skill::Armorer, 5).with(Skill::Block, 5)
        };
        let mut raised: Vec<Attribute> = [Attribute::Strength, Attribute::Endurance, Attribute::Luck]
            .into_iter()
            .filter(|attribute| current.attributes[*attribute] < 100)
            .collect();
        for attribute in Attribute::all() {
            if raised.len() >= 3 {
                break;
            }
            if current.attributes[attribute] < 100 && !raised.contains(&attribute) {
                raised.push(attribute);
            }
        }

        let level_up = classic_level_up(&current, skill_ups, &raised);
        assert!(
            is_valid_classic(&current, &level_up, &plan.choices.major_skills),
            "round {round}"
        );
        plan.commit_level_up(level_up).expect("valid classic level-up");
    }

    let levels = plan.levels();
    assert_eq!(levels.len(), 15);
    for level in &levels {
        assert!(level.attributes.iter().all(|(_, value)| value <= 100));
        assert!(level.skills.iter().all(|(_, value)| value <= 100));
    }
    let last = plan.current_level();
    assert_eq!(last.attribute(Attribute::Strength), 100);
    assert_eq!(last.attribute(Attribute::Endurance), 100);
    for pair in levels.windows(2) {
        assert!(pair[1].health > pair[0].health);
    }
}
