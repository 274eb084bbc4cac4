use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::catalog;
use super::dashboard::{filter_by_status, DashboardSummary, StatusFilter};
use super::domain::{
    AnswerSet, AnswerValue, AssessmentId, AssessmentRecord, AssessmentStatus, PhotoRef,
    RecordMetadata,
};
use super::recommendations::recommend;
use super::repository::{AssessmentRepository, RepositoryError};
use super::scoring::{classify, score_components, total_score, ScoreComponent};

/// Derived view of a draft. Rebuilt from the answers on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub total: u32,
    pub status: AssessmentStatus,
    pub recommendations: Vec<&'static str>,
    pub components: Vec<ScoreComponent>,
}

impl Evaluation {
    pub fn of(answers: &AnswerSet) -> Self {
        let total = total_score(answers);
        Self {
            total,
            status: classify(i64::from(total)),
            recommendations: recommend(answers),
            components: score_components(answers),
        }
    }
}

/// In-progress assessment being filled in by the caller.
///
/// Callers re-run [`AssessmentDraft::evaluate`] after every mutation to keep the displayed score,
/// status and advisories current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentDraft {
    pub school: String,
    pub room: String,
    pub assessor: String,
    pub answers: AnswerSet,
    pub photo_refs: Vec<PhotoRef>,
    pub notes: String,
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentDraft {
    pub fn new() -> Self {
        Self {
            school: String::new(),
            room: String::new(),
            assessor: String::new(),
            answers: catalog::default_answers(),
            photo_refs: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn set_answer(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.answers.set(key, value);
    }

    pub fn attach_photo(&mut self, photo: PhotoRef) {
        self.photo_refs.push(photo);
    }

    pub fn evaluate(&self) -> Evaluation {
        Evaluation::of(&self.answers)
    }

    /// Discard everything, including school and assessor.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Prepare the next room at the same school: school and assessor carry over.
    pub fn start_next_room(&mut self) {
        let school = std::mem::take(&mut self.school);
        let assessor = std::mem::take(&mut self.assessor);
        *self = Self {
            school,
            assessor,
            ..Self::new()
        };
    }

    fn metadata(&self) -> RecordMetadata {
        RecordMetadata {
            school: self.school.clone(),
            room: self.room.clone(),
            assessor: self.assessor.clone(),
            notes: self.notes.clone(),
        }
    }
}

fn next_assessment_id() -> AssessmentId {
    AssessmentId(Uuid::new_v4().to_string())
}

/// Service composing scoring, the record archive, and dashboard queries.
pub struct AssessmentService<R> {
    repository: Arc<R>,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Freeze the draft into a record stamped now and archive it.
    pub fn save(&self, draft: &AssessmentDraft) -> Result<AssessmentRecord, RepositoryError> {
        self.save_at(draft, Utc::now())
    }

    pub fn save_at(
        &self,
        draft: &AssessmentDraft,
        created_at: DateTime<Utc>,
    ) -> Result<AssessmentRecord, RepositoryError> {
        let record = AssessmentRecord::freeze(
            next_assessment_id(),
            draft.metadata(),
            draft.answers.clone(),
            draft.photo_refs.clone(),
            created_at,
        );

        self.repository.append(record.clone())?;
        info!(
            id = %record.id(),
            school = record.school(),
            room = record.room(),
            total = record.total(),
            status = %record.status(),
            "assessment saved"
        );
        Ok(record)
    }

    pub fn dashboard(&self, filter: StatusFilter) -> Vec<AssessmentRecord> {
        filter_by_status(&self.repository.load_all(), filter)
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_records(&self.repository.load_all())
    }

    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.repository.clear()?;
        info!("assessment archive cleared");
        Ok(())
    }
}
