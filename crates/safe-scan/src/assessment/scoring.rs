use serde::Serialize;

use super::catalog;
use super::domain::{AnswerSet, AnswerValue, AssessmentStatus};

/// Highest total still classified GREEN.
pub const GREEN_MAX_TOTAL: i64 = 3;
/// Highest total still classified YELLOW.
pub const YELLOW_MAX_TOTAL: i64 = 7;
/// Threshold legend shown next to a score.
pub const THRESHOLD_LEGEND: &str = "0–3 Green • 4–7 Yellow • 8+ Red";

/// Points for one item's answer. Unknown keys and out-of-domain or missing values score 0.
pub fn score_points(key: &str, value: Option<&AnswerValue>) -> u32 {
    match (catalog::domain_of(key), value) {
        (Some(domain), Some(value)) => domain.points(value).unwrap_or(0),
        _ => 0,
    }
}

/// Sum of item points over the catalog. Keys outside the catalog are never summed.
pub fn total_score(answers: &AnswerSet) -> u32 {
    catalog::items()
        .iter()
        .map(|item| score_points(item.key, answers.get(item.key)))
        .sum()
}

pub fn classify(total: i64) -> AssessmentStatus {
    if total <= GREEN_MAX_TOTAL {
        AssessmentStatus::Green
    } else if total <= YELLOW_MAX_TOTAL {
        AssessmentStatus::Yellow
    } else {
        AssessmentStatus::Red
    }
}

/// Discrete contribution to a total, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub key: &'static str,
    pub label: &'static str,
    pub value: AnswerValue,
    pub points: u32,
}

/// Items that contributed points, in catalog order.
pub fn score_components(answers: &AnswerSet) -> Vec<ScoreComponent> {
    catalog::items()
        .iter()
        .filter_map(|item| {
            let value = answers.get(item.key)?;
            let points = score_points(item.key, Some(value));
            (points > 0).then(|| ScoreComponent {
                key: item.key,
                label: item.label,
                value: value.clone(),
                points,
            })
        })
        .collect()
}
