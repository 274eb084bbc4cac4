use super::catalog::{self, keys};
use super::domain::{AnswerSet, AnswerValue};

/// Fallback the caller shows when no rule fires. [`recommend`] never returns it.
pub const NO_CRITICAL_ISSUES: &str = "No critical issues detected. Maintain routine monitoring.";

/// Condition over one or more checklist answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulePredicate {
    /// The item's effective answer equals the given value.
    Equals(&'static str, AnswerValue),
    /// The item's effective answer differs from its domain's no-issue value.
    Flagged(&'static str),
    /// At least one of the items is flagged.
    AnyFlagged(&'static [&'static str]),
}

impl RulePredicate {
    pub fn holds(&self, answers: &AnswerSet) -> bool {
        match self {
            RulePredicate::Equals(key, expected) => {
                answers.effective(key).as_ref() == Some(expected)
            }
            RulePredicate::Flagged(key) => flagged(answers, key),
            RulePredicate::AnyFlagged(keys) => keys.iter().any(|key| flagged(answers, key)),
        }
    }
}

fn flagged(answers: &AnswerSet, key: &str) -> bool {
    match (catalog::domain_of(key), answers.effective(key)) {
        (Some(domain), Some(value)) => value != domain.no_issue(),
        _ => false,
    }
}

/// Advisory text attached to a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRule {
    pub predicate: RulePredicate,
    pub advice: &'static str,
}

static RULES: [RecommendationRule; 13] = [
    RecommendationRule {
        predicate: RulePredicate::Equals(keys::WALL_CRACKS, AnswerValue::Major),
        advice: "Stop using the room; consult a qualified technician/engineer for crack assessment.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::COLUMN_TILT),
        advice: "Check alignment of columns/beams; if tilt is visible, restrict access and report.",
    },
    RecommendationRule {
        predicate: RulePredicate::AnyFlagged(&[keys::ROOF_LEAK, keys::LOOSE_CEILING]),
        advice: "Fix roof leaks and secure ceiling panels to prevent falling objects.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::EXPOSED_REBAR),
        advice: "Repair spalling concrete and protect exposed reinforcement from corrosion.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::ELECTRICAL),
        advice: "Secure exposed electrical components; isolate power if necessary.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::BLOCKED_EXIT),
        advice: "Clear emergency exits and keep pathways unobstructed.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::OVERCAPACITY),
        advice: "Reduce classroom occupancy to safe levels.",
    },
    RecommendationRule {
        predicate: RulePredicate::Equals(keys::VENTILATION, AnswerValue::Inadequate),
        advice: "Improve ventilation (open windows, install vents/fans as appropriate).",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::NEAR_TREES),
        advice: "Trim or assess large trees near the structure to minimize fall risk.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::FOUNDATION),
        advice: "Investigate signs of settlement; avoid heavy loads; seek expert inspection.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::GROUND_SHIFT),
        advice: "Check soil settlement; avoid adding load; consider temporary room closure and consult local public works/technician.",
    },
    RecommendationRule {
        predicate: RulePredicate::Flagged(keys::FLOOD_HISTORY),
        advice: "Store assets higher, protect electrical points; prepare flood SOP.",
    },
    RecommendationRule {
        predicate: RulePredicate::Equals(keys::EVAC_AREA, AnswerValue::Inadequate),
        advice: "Designate a clear evacuation area and mark routes visibly.",
    },
];

/// Rules in evaluation order.
pub fn rules() -> &'static [RecommendationRule] {
    &RULES
}

/// Advisories whose predicates hold, in rule order. Rules are independent and not deduplicated.
pub fn recommend(answers: &AnswerSet) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.predicate.holds(answers))
        .map(|rule| rule.advice)
        .collect()
}
