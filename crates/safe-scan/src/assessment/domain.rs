use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog;

/// Identifier wrapper for saved assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub String);

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a photo owned by the capture collaborator. Never dereferenced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(pub String);

/// A single selected answer, carried as its wire string.
///
/// Strings outside every known domain are kept verbatim in [`AnswerValue::Unrecognized`] so
/// that persisted snapshots survive a round trip; they score zero and fire no rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnswerValue {
    None,
    Minor,
    Major,
    Adequate,
    Inadequate,
    Yes,
    No,
    Unrecognized(String),
}

impl AnswerValue {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "None" => Self::None,
            "Minor" => Self::Minor,
            "Major" => Self::Major,
            "Adequate" => Self::Adequate,
            "Inadequate" => Self::Inadequate,
            "Yes" => Self::Yes,
            "No" => Self::No,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Minor => "Minor",
            Self::Major => "Major",
            Self::Adequate => "Adequate",
            Self::Inadequate => "Inadequate",
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AnswerValue> for String {
    fn from(value: AnswerValue) -> Self {
        match value {
            AnswerValue::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SEVERITY_OPTIONS: &[AnswerValue] =
    &[AnswerValue::None, AnswerValue::Minor, AnswerValue::Major];
const ADEQUACY_OPTIONS: &[AnswerValue] = &[AnswerValue::Adequate, AnswerValue::Inadequate];
const HAZARD_OPTIONS: &[AnswerValue] = &[AnswerValue::No, AnswerValue::Yes];
const SAFEGUARD_OPTIONS: &[AnswerValue] = &[AnswerValue::Yes, AnswerValue::No];

/// Answer scale a checklist item draws from, with its point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerDomain {
    /// None / Minor / Major.
    Severity,
    /// Adequate / Inadequate.
    Adequacy,
    /// Yes / No where "Yes" is the risky answer. Reserved: no current item uses it.
    Hazard,
    /// Yes / No where "No" is the risky answer. Reserved: no current item uses it.
    Safeguard,
}

impl AnswerDomain {
    /// Values accepted by this domain, no-issue value first.
    pub const fn options(self) -> &'static [AnswerValue] {
        match self {
            AnswerDomain::Severity => SEVERITY_OPTIONS,
            AnswerDomain::Adequacy => ADEQUACY_OPTIONS,
            AnswerDomain::Hazard => HAZARD_OPTIONS,
            AnswerDomain::Safeguard => SAFEGUARD_OPTIONS,
        }
    }

    pub fn no_issue(self) -> AnswerValue {
        self.options()[0].clone()
    }

    /// Points for `value`, or `None` when the value is outside this domain.
    pub fn points(self, value: &AnswerValue) -> Option<u32> {
        let points = match (self, value) {
            (AnswerDomain::Severity, AnswerValue::None) => 0,
            (AnswerDomain::Severity, AnswerValue::Minor) => 1,
            (AnswerDomain::Severity, AnswerValue::Major) => 2,
            (AnswerDomain::Adequacy, AnswerValue::Adequate) => 0,
            (AnswerDomain::Adequacy, AnswerValue::Inadequate) => 2,
            (AnswerDomain::Hazard, AnswerValue::No) => 0,
            (AnswerDomain::Hazard, AnswerValue::Yes) => 2,
            (AnswerDomain::Safeguard, AnswerValue::Yes) => 0,
            (AnswerDomain::Safeguard, AnswerValue::No) => 2,
            _ => return None,
        };
        Some(points)
    }

    pub fn accepts(self, value: &AnswerValue) -> bool {
        self.points(value).is_some()
    }
}

/// Mapping from checklist key to the selected answer.
///
/// Keys absent from the map read as their domain's no-issue value. Keys unknown to the catalog
/// may be stored but are ignored by scoring and recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.0.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: AnswerValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Selected value for a catalog key with missing or out-of-domain answers normalized to the
    /// domain's no-issue value. Unknown keys yield `None`.
    pub fn effective(&self, key: &str) -> Option<AnswerValue> {
        let item = catalog::item(key)?;
        match self.0.get(key) {
            Some(value) if item.domain.accepts(value) => Some(value.clone()),
            _ => Some(item.domain.no_issue()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Three-level risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssessmentStatus {
    Green,
    Yellow,
    Red,
}

impl AssessmentStatus {
    pub const fn ordered() -> [AssessmentStatus; 3] {
        [Self::Green, Self::Yellow, Self::Red]
    }

    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Green => "GREEN",
            AssessmentStatus::Yellow => "YELLOW",
            AssessmentStatus::Red => "RED",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            AssessmentStatus::Green => "Low risk – maintain & monitor",
            AssessmentStatus::Yellow => "Moderate risk – fix issues soon",
            AssessmentStatus::Red => "High risk – immediate action required",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Frozen snapshot of a completed assessment.
///
/// `total` and `status` are computed once by [`AssessmentRecord::freeze`] and never recomputed,
/// even if scoring rules later change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    id: AssessmentId,
    school: String,
    room: String,
    assessor: String,
    answers: AnswerSet,
    photo_refs: Vec<PhotoRef>,
    notes: String,
    total: u32,
    status: AssessmentStatus,
    created_at: DateTime<Utc>,
}

/// Free-text metadata captured alongside the checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMetadata {
    pub school: String,
    pub room: String,
    pub assessor: String,
    pub notes: String,
}

impl AssessmentRecord {
    pub fn freeze(
        id: AssessmentId,
        metadata: RecordMetadata,
        answers: AnswerSet,
        photo_refs: Vec<PhotoRef>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total = super::scoring::total_score(&answers);
        let status = super::scoring::classify(i64::from(total));
        let RecordMetadata {
            school,
            room,
            assessor,
            notes,
        } = metadata;

        Self {
            id,
            school,
            room,
            assessor,
            answers,
            photo_refs,
            notes,
            total,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn assessor(&self) -> &str {
        &self.assessor
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn photo_refs(&self) -> &[PhotoRef] {
        &self.photo_refs
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
