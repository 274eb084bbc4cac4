use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::domain::{AssessmentRecord, AssessmentStatus};

/// Status narrowing applied to the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AssessmentStatus),
}

impl StatusFilter {
    pub fn matches(self, record: &AssessmentRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status() == status,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status filter '{0}' (expected ALL, GREEN, YELLOW or RED)")]
pub struct UnknownStatusFilter(pub String);

impl FromStr for StatusFilter {
    type Err = UnknownStatusFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(StatusFilter::All),
            "GREEN" => Ok(StatusFilter::Only(AssessmentStatus::Green)),
            "YELLOW" => Ok(StatusFilter::Only(AssessmentStatus::Yellow)),
            "RED" => Ok(StatusFilter::Only(AssessmentStatus::Red)),
            _ => Err(UnknownStatusFilter(value.to_string())),
        }
    }
}

/// Records matching `filter`, keeping their relative order.
pub fn filter_by_status(records: &[AssessmentRecord], filter: StatusFilter) -> Vec<AssessmentRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Per-status counts over a record list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

impl DashboardSummary {
    pub fn from_records(records: &[AssessmentRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                summary.total += 1;
                match record.status() {
                    AssessmentStatus::Green => summary.green += 1,
                    AssessmentStatus::Yellow => summary.yellow += 1,
                    AssessmentStatus::Red => summary.red += 1,
                }
                summary
            })
    }

    pub fn count(&self, status: AssessmentStatus) -> usize {
        match status {
            AssessmentStatus::Green => self.green,
            AssessmentStatus::Yellow => self.yellow,
            AssessmentStatus::Red => self.red,
        }
    }
}
