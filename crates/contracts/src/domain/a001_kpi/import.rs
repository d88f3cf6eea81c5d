use super::aggregate::KpiId;
use serde::{Deserialize, Serialize};

/// Column order of KPI batch files (import and export).
pub const CSV_HEADER: [&str; 14] = [
    "indicator",
    "department",
    "objective",
    "target",
    "baseline",
    "status",
    "progress",
    "budget",
    "frequency",
    "activities",
    "verification",
    "comments",
    "timelineStart",
    "timelineEnd",
];

/// A row that could not be imported. `line` is 1-based and counts the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

/// Outcome of a batch upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: Vec<KpiId>,
    pub rejected: Vec<RejectedRow>,
}

impl ImportReport {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn total_rows(&self) -> usize {
        self.imported_count() + self.rejected_count()
    }
}
