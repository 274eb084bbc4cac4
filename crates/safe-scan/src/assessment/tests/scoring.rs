use super::common::*;
use crate::assessment::catalog::{self, default_answers, keys};
use crate::assessment::domain::{AnswerDomain, AnswerSet, AnswerValue, AssessmentStatus};
use crate::assessment::scoring::{classify, score_components, score_points, total_score};

#[test]
fn severity_items_score_zero_one_two() {
    for item in catalog::items()
        .iter()
        .filter(|item| item.domain == AnswerDomain::Severity)
    {
        assert_eq!(score_points(item.key, Some(&AnswerValue::None)), 0, "{}", item.key);
        assert_eq!(score_points(item.key, Some(&AnswerValue::Minor)), 1, "{}", item.key);
        assert_eq!(score_points(item.key, Some(&AnswerValue::Major)), 2, "{}", item.key);
    }
}

#[test]
fn adequacy_items_score_zero_or_two() {
    for key in [keys::VENTILATION, keys::EVAC_AREA] {
        assert_eq!(score_points(key, Some(&AnswerValue::Adequate)), 0);
        assert_eq!(score_points(key, Some(&AnswerValue::Inadequate)), 2);
    }
}

#[test]
fn out_of_domain_and_missing_values_score_zero() {
    assert_eq!(score_points(keys::VENTILATION, Some(&AnswerValue::Major)), 0);
    assert_eq!(score_points(keys::WALL_CRACKS, Some(&AnswerValue::Inadequate)), 0);
    assert_eq!(score_points(keys::WALL_CRACKS, Some(&AnswerValue::Adequate)), 0);
    assert_eq!(score_points(keys::WALL_CRACKS, Some(&AnswerValue::Yes)), 0);
    assert_eq!(
        score_points(keys::WALL_CRACKS, Some(&AnswerValue::parse("Severe"))),
        0
    );
    assert_eq!(score_points(keys::WALL_CRACKS, None), 0);
    assert_eq!(score_points("chalkboard", Some(&AnswerValue::Major)), 0);
}

#[test]
fn reserved_yes_no_domains_score_the_risky_answer() {
    assert_eq!(AnswerDomain::Hazard.points(&AnswerValue::Yes), Some(2));
    assert_eq!(AnswerDomain::Hazard.points(&AnswerValue::No), Some(0));
    assert_eq!(AnswerDomain::Safeguard.points(&AnswerValue::No), Some(2));
    assert_eq!(AnswerDomain::Safeguard.points(&AnswerValue::Yes), Some(0));
    assert_eq!(AnswerDomain::Hazard.points(&AnswerValue::Minor), None);
    assert_eq!(AnswerDomain::Safeguard.no_issue(), AnswerValue::Yes);
}

#[test]
fn default_answers_total_zero_and_green() {
    let total = total_score(&default_answers());
    assert_eq!(total, 0);
    assert_eq!(classify(i64::from(total)), AssessmentStatus::Green);
}

#[test]
fn empty_answer_set_scores_like_defaults() {
    assert_eq!(total_score(&AnswerSet::empty()), 0);
}

#[test]
fn classification_boundaries() {
    assert_eq!(classify(-4), AssessmentStatus::Green);
    assert_eq!(classify(0), AssessmentStatus::Green);
    assert_eq!(classify(3), AssessmentStatus::Green);
    assert_eq!(classify(4), AssessmentStatus::Yellow);
    assert_eq!(classify(7), AssessmentStatus::Yellow);
    assert_eq!(classify(8), AssessmentStatus::Red);
    assert_eq!(classify(38), AssessmentStatus::Red);
}

#[test]
fn unknown_keys_are_never_summed() {
    let answers = default_answers()
        .with("chalkboard", AnswerValue::Major)
        .with("projector", AnswerValue::Inadequate);
    assert_eq!(total_score(&answers), 0);
}

#[test]
fn scoring_is_idempotent() {
    let answers = red_answers();
    assert_eq!(total_score(&answers), total_score(&answers));
    assert_eq!(score_components(&answers), score_components(&answers));
}

#[test]
fn raising_any_single_item_never_lowers_the_total() {
    let baseline = total_score(&default_answers());
    for item in catalog::items() {
        for value in item.domain.options() {
            let answers = default_answers().with(item.key, value.clone());
            assert!(
                total_score(&answers) >= baseline,
                "{} = {} lowered the total",
                item.key,
                value
            );
        }
    }
}

#[test]
fn scenario_with_major_cracks_and_poor_ventilation_is_yellow() {
    let answers = yellow_answers();
    let total = total_score(&answers);
    assert_eq!(total, 4);
    assert_eq!(classify(i64::from(total)), AssessmentStatus::Yellow);
}

#[test]
fn scenario_with_four_major_site_hazards_is_red() {
    let answers = red_answers();
    let total = total_score(&answers);
    assert_eq!(total, 8);
    assert_eq!(classify(i64::from(total)), AssessmentStatus::Red);
}

#[test]
fn components_list_contributing_items_in_catalog_order() {
    let answers = answers_with(&[
        (keys::EVAC_AREA, AnswerValue::Inadequate),
        (keys::COLUMN_TILT, AnswerValue::Minor),
    ]);

    let components = score_components(&answers);

    let summary: Vec<_> = components
        .iter()
        .map(|component| (component.key, component.points))
        .collect();
    assert_eq!(summary, vec![(keys::COLUMN_TILT, 1), (keys::EVAC_AREA, 2)]);
    assert_eq!(components[0].label, "Tilted columns / beam deformation");
}
