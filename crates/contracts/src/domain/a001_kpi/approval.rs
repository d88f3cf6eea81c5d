use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::Kpi;

/// Review state of a submitted KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 3] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(wanted))
    }
}

/// Approval record carried by every KPI. New KPIs start `Pending`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub status: ApprovalStatus,
    #[serde(default)]
    pub decided_by: String,
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: String,
}

impl Approval {
    pub fn approved(by: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            status: ApprovalStatus::Approved,
            decided_by: by.into(),
            decided_at: Some(at),
            note: String::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

/// Body of `POST /api/kpi/:id/approval`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub decision: ApprovalDecision,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalError {
    /// Only pending KPIs can be decided.
    AlreadyDecided(ApprovalStatus),
    /// Rejections must say why.
    MissingReason,
}

impl std::fmt::Display for ApprovalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalError::AlreadyDecided(status) => {
                write!(f, "KPI is already {}", status.label().to_lowercase())
            }
            ApprovalError::MissingReason => write!(f, "A reason is required to reject a KPI"),
        }
    }
}

impl Kpi {
    /// Applies a reviewer decision to a pending KPI.
    pub fn decide(
        &mut self,
        decision: ApprovalDecision,
        by: &str,
        note: &str,
        at: DateTime<Utc>,
    ) -> Result<(), ApprovalError> {
        if !self.approval.is_pending() {
            return Err(ApprovalError::AlreadyDecided(self.approval.status));
        }
        let note = note.trim();
        let status = match decision {
            ApprovalDecision::Approve => ApprovalStatus::Approved,
            ApprovalDecision::Reject if note.is_empty() => return Err(ApprovalError::MissingReason),
            ApprovalDecision::Reject => ApprovalStatus::Rejected,
        };
        self.approval = Approval {
            status,
            decided_by: by.trim().to_string(),
            decided_at: Some(at),
            note: note.to_string(),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::KpiDto;
    use chrono::TimeZone;

    fn pending() -> Kpi {
        Kpi::new_for_insert(KpiDto {
            indicator: "Leads".into(),
            department: "Sales".into(),
            objective: "Grow pipeline".into(),
            timeline_start: "2025-01-01".into(),
            timeline_end: "2025-06-30".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_new_kpis_are_pending() {
        assert!(pending().approval.is_pending());
    }

    #[test]
    fn test_approve_then_decide_again_fails() {
        let at = Utc.with_ymd_and_hms(2025, 8, 16, 9, 0, 0).unwrap();
        let mut kpi = pending();
        kpi.decide(ApprovalDecision::Approve, " Kwame Asante ", "", at).unwrap();
        assert_eq!(kpi.approval.status, ApprovalStatus::Approved);
        assert_eq!(kpi.approval.decided_by, "Kwame Asante");
        assert_eq!(kpi.approval.decided_at, Some(at));

        let err = kpi.decide(ApprovalDecision::Reject, "x", "late", at).unwrap_err();
        assert_eq!(err, ApprovalError::AlreadyDecided(ApprovalStatus::Approved));
        assert_eq!(err.to_string(), "KPI is already approved");
    }

    #[test]
    fn test_reject_requires_reason() {
        let at = Utc.with_ymd_and_hms(2025, 8, 16, 9, 0, 0).unwrap();
        let mut kpi = pending();
        assert_eq!(
            kpi.decide(ApprovalDecision::Reject, "BDC", "  ", at),
            Err(ApprovalError::MissingReason)
        );
        assert!(kpi.approval.is_pending());

        kpi.decide(ApprovalDecision::Reject, "BDC", "Target is not measurable", at)
            .unwrap();
        assert_eq!(kpi.approval.status, ApprovalStatus::Rejected);
        assert_eq!(kpi.approval.note, "Target is not measurable");
    }

    #[test]
    fn test_wire_format() {
        let request: ApprovalRequest = serde_json::from_str(r#"{"decision":"approve"}"#).unwrap();
        assert_eq!(request.decision, ApprovalDecision::Approve);
        assert_eq!(request.note, "");
        assert_eq!(ApprovalStatus::from_label("rejected"), Some(ApprovalStatus::Rejected));
    }
}
