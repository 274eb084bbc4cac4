use super::common::*;
use crate::assessment::catalog::{default_answers, keys};
use crate::assessment::domain::{AnswerSet, AnswerValue};
use crate::assessment::recommendations::{recommend, rules, RulePredicate, NO_CRITICAL_ISSUES};

fn advice_for(key: &str) -> &'static str {
    rules()
        .iter()
        .find(|rule| match &rule.predicate {
            RulePredicate::Equals(rule_key, _) | RulePredicate::Flagged(rule_key) => {
                *rule_key == key
            }
            RulePredicate::AnyFlagged(rule_keys) => {
                rule_keys.iter().any(|rule_key| *rule_key == key)
            }
        })
        .map(|rule| rule.advice)
        .expect("rule registered for key")
}

#[test]
fn default_answers_produce_no_advisories() {
    let advisories = recommend(&default_answers());
    assert!(advisories.is_empty());
    assert!(!advisories.contains(&NO_CRITICAL_ISSUES));
}

#[test]
fn thirteen_rules_in_declaration_order() {
    assert_eq!(rules().len(), 13);
    assert!(rules()[0].advice.starts_with("Stop using the room"));
    assert!(rules()[12].advice.starts_with("Designate a clear evacuation area"));
}

#[test]
fn cracks_and_ventilation_fire_in_rule_order() {
    let advisories = recommend(&yellow_answers());
    assert_eq!(
        advisories,
        vec![
            advice_for(keys::WALL_CRACKS),
            advice_for(keys::VENTILATION)
        ]
    );
}

#[test]
fn site_hazards_fire_in_declaration_order() {
    let advisories = recommend(&red_answers());
    assert_eq!(
        advisories,
        vec![
            advice_for(keys::BLOCKED_EXIT),
            advice_for(keys::OVERCAPACITY),
            advice_for(keys::GROUND_SHIFT),
            advice_for(keys::FLOOD_HISTORY),
        ]
    );
}

#[test]
fn minor_wall_cracks_do_not_trigger_stop_use() {
    let answers = answers_with(&[(keys::WALL_CRACKS, AnswerValue::Minor)]);
    assert!(recommend(&answers).is_empty());
}

#[test]
fn minor_issues_trigger_not_none_rules() {
    let answers = answers_with(&[
        (keys::COLUMN_TILT, AnswerValue::Minor),
        (keys::FOUNDATION, AnswerValue::Minor),
    ]);
    assert_eq!(
        recommend(&answers),
        vec![advice_for(keys::COLUMN_TILT), advice_for(keys::FOUNDATION)]
    );
}

#[test]
fn roof_and_ceiling_share_a_single_advisory() {
    let roof_only = answers_with(&[(keys::ROOF_LEAK, AnswerValue::Minor)]);
    let ceiling_only = answers_with(&[(keys::LOOSE_CEILING, AnswerValue::Major)]);
    let both = answers_with(&[
        (keys::ROOF_LEAK, AnswerValue::Major),
        (keys::LOOSE_CEILING, AnswerValue::Major),
    ]);

    let expected = vec![advice_for(keys::ROOF_LEAK)];
    assert_eq!(recommend(&roof_only), expected);
    assert_eq!(recommend(&ceiling_only), expected);
    assert_eq!(recommend(&both), expected);
}

#[test]
fn items_without_rules_add_no_advisories() {
    let answers = answers_with(&[
        (keys::UNEVEN_FLOOR, AnswerValue::Major),
        (keys::STUCK_FRAMES, AnswerValue::Major),
        (keys::WATER_DAMAGE, AnswerValue::Major),
        (keys::HEAVY_OBJECTS, AnswerValue::Major),
        (keys::CREAKING, AnswerValue::Major),
    ]);
    assert!(recommend(&answers).is_empty());
}

#[test]
fn every_flagged_item_fires_every_rule() {
    let mut answers = AnswerSet::empty();
    for rule in rules() {
        match &rule.predicate {
            RulePredicate::Equals(key, value) => answers.set(*key, value.clone()),
            RulePredicate::Flagged(key) => answers.set(*key, AnswerValue::Major),
            RulePredicate::AnyFlagged(group) => {
                for key in group.iter() {
                    answers.set(*key, AnswerValue::Major);
                }
            }
        }
    }

    let advisories = recommend(&answers);
    let expected: Vec<_> = rules().iter().map(|rule| rule.advice).collect();
    assert_eq!(advisories, expected);
}

#[test]
fn missing_unknown_and_out_of_domain_answers_fire_nothing() {
    let answers = AnswerSet::empty()
        .with("chalkboard", AnswerValue::Major)
        .with(keys::COLUMN_TILT, AnswerValue::Adequate)
        .with(keys::VENTILATION, AnswerValue::Major)
        .with(keys::ELECTRICAL, AnswerValue::parse("sparking"));
    assert!(recommend(&answers).is_empty());
}

#[test]
fn recommendations_are_idempotent() {
    let answers = red_answers();
    assert_eq!(recommend(&answers), recommend(&answers));
}
