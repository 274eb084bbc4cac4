//! Room safety assessment: checklist catalog, scoring, status classification, advisories, and
//! the local record archive behind the dashboard.

pub mod catalog;
pub mod dashboard;
pub mod domain;
pub mod export;
pub mod recommendations;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{default_answers, CheckItem};
pub use dashboard::{filter_by_status, DashboardSummary, StatusFilter, UnknownStatusFilter};
pub use domain::{
    AnswerDomain, AnswerSet, AnswerValue, AssessmentId, AssessmentRecord, AssessmentStatus,
    PhotoRef, RecordMetadata,
};
pub use export::{write_csv, ExportError};
pub use recommendations::{recommend, NO_CRITICAL_ISSUES};
pub use repository::{
    AssessmentRepository, FileSlots, JsonSlotRepository, MemorySlots, RepositoryError,
    SlotStorage, ASSESSMENTS_SLOT,
};
pub use scoring::{classify, score_points, total_score, ScoreComponent, THRESHOLD_LEGEND};
pub use service::{AssessmentDraft, AssessmentService, Evaluation};
