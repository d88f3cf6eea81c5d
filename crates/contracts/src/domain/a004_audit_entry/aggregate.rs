use crate::domain::common::criterion;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    Login,
    Logout,
    #[serde(rename = "Login Failed")]
    LoginFailed,
    Navigation,
    #[serde(rename = "KPI Created")]
    KpiCreated,
    #[serde(rename = "KPI Updated")]
    KpiUpdated,
    #[serde(rename = "KPI Deleted")]
    KpiDeleted,
    #[serde(rename = "KPI Imported")]
    KpiImported,
    #[serde(rename = "KPI Approved")]
    KpiApproved,
    #[serde(rename = "KPI Rejected")]
    KpiRejected,
    #[serde(rename = "Cycle Created")]
    CycleCreated,
    #[serde(rename = "Cycle Advanced")]
    CycleAdvanced,
    #[serde(rename = "Goal Created")]
    GoalCreated,
    #[serde(rename = "Goal Updated")]
    GoalUpdated,
    #[serde(rename = "User Created")]
    UserCreated,
    #[serde(rename = "Data Export")]
    DataExport,
}

impl AuditAction {
    pub const ALL: [AuditAction; 16] = [
        AuditAction::Login,
        AuditAction::Logout,
        AuditAction::LoginFailed,
        AuditAction::Navigation,
        AuditAction::KpiCreated,
        AuditAction::KpiUpdated,
        AuditAction::KpiDeleted,
        AuditAction::KpiImported,
        AuditAction::KpiApproved,
        AuditAction::KpiRejected,
        AuditAction::CycleCreated,
        AuditAction::CycleAdvanced,
        AuditAction::GoalCreated,
        AuditAction::GoalUpdated,
        AuditAction::UserCreated,
        AuditAction::DataExport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AuditAction::Login => "Login",
            AuditAction::Logout => "Logout",
            AuditAction::LoginFailed => "Login Failed",
            AuditAction::Navigation => "Navigation",
            AuditAction::KpiCreated => "KPI Created",
            AuditAction::KpiUpdated => "KPI Updated",
            AuditAction::KpiDeleted => "KPI Deleted",
            AuditAction::KpiImported => "KPI Imported",
            AuditAction::KpiApproved => "KPI Approved",
            AuditAction::KpiRejected => "KPI Rejected",
            AuditAction::CycleCreated => "Cycle Created",
            AuditAction::CycleAdvanced => "Cycle Advanced",
            AuditAction::GoalCreated => "Goal Created",
            AuditAction::GoalUpdated => "Goal Updated",
            AuditAction::UserCreated => "User Created",
            AuditAction::DataExport => "Data Export",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Actions a client may report about its own session. Failed logins are
    /// derived on the server from the claimed role.
    pub fn is_session_event(&self) -> bool {
        matches!(
            self,
            AuditAction::Login | AuditAction::Logout | AuditAction::Navigation
        )
    }
}

/// Body of `POST /api/audit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEventDto {
    pub action: AuditAction,
    #[serde(default)]
    pub details: String,
}

/// One line of the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub role: String,
    pub action: AuditAction,
    pub details: String,
    pub ip_address: String,
}

impl AuditEntry {
    pub fn new(
        user: impl Into<String>,
        role: impl Into<String>,
        action: AuditAction,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user: user.into(),
            role: role.into(),
            action,
            details: details.into(),
            ip_address: String::new(),
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = ip.into();
        self
    }

    /// `YYYY-MM` of the entry, as matched by the month filter.
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }
}

/// Filter for the audit log screen. Same wildcard rules as the KPI filter
/// ("All Users", "All Actions").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// `YYYY-MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

impl AuditFilter {
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(user) = criterion(&self.user) {
            if !entry.user.eq_ignore_ascii_case(user) {
                return false;
            }
        }
        if let Some(action) = criterion(&self.action) {
            match AuditAction::from_label(action) {
                Some(wanted) if wanted == entry.action => {}
                _ => return false,
            }
        }
        if let Some(month) = criterion(&self.month) {
            if entry.month_key() != month {
                return false;
            }
        }
        true
    }

    /// Matching entries, newest first.
    pub fn apply(&self, entries: &[AuditEntry]) -> Vec<AuditEntry> {
        let mut result: Vec<AuditEntry> =
            entries.iter().filter(|e| self.matches(e)).cloned().collect();
        result.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        result
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total_activities: usize,
    pub todays_activities: usize,
    pub active_users: usize,
    pub failed_logins: usize,
}

pub fn summarize(entries: &[AuditEntry], today: NaiveDate) -> AuditSummary {
    let users: HashSet<String> = entries.iter().map(|e| e.user.to_lowercase()).collect();
    AuditSummary {
        total_activities: entries.len(),
        todays_activities: entries
            .iter()
            .filter(|e| e.timestamp.date_naive() == today)
            .count(),
        active_users: users.len(),
        failed_logins: entries
            .iter()
            .filter(|e| e.action == AuditAction::LoginFailed)
            .count(),
    }
}

/// Distinct user names in first-seen order, for the user select box.
pub fn known_users(entries: &[AuditEntry]) -> Vec<String> {
    let mut users: Vec<String> = Vec::new();
    for e in entries {
        if !users.iter().any(|u| u.eq_ignore_ascii_case(&e.user)) {
            users.push(e.user.clone());
        }
    }
    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(user: &str, action: AuditAction, y: i32, m: u32, d: u32) -> AuditEntry {
        let mut e = AuditEntry::new(user, "Department Head", action, "details");
        e.timestamp = Utc.with_ymd_and_hms(y, m, d, 19, 26, 26).unwrap();
        e
    }

    fn sample() -> Vec<AuditEntry> {
        vec![
            entry("Kamil Alhassan", AuditAction::Navigation, 2025, 8, 15),
            entry("Mike Johnson", AuditAction::KpiCreated, 2025, 8, 16),
            entry("Mike Johnson", AuditAction::LoginFailed, 2025, 7, 2),
            entry("kamil alhassan", AuditAction::Logout, 2025, 8, 16),
        ]
    }

    #[test]
    fn test_wildcard_filter_returns_everything_newest_first() {
        let filter = AuditFilter {
            user: Some("All Users".into()),
            action: Some("All Actions".into()),
            month: None,
        };
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 4);
        assert!(result.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_filter_by_user_action_and_month() {
        let data = sample();
        let by_user = AuditFilter { user: Some("Mike Johnson".into()), ..Default::default() };
        assert_eq!(by_user.apply(&data).len(), 2);

        let by_action = AuditFilter { action: Some("KPI Created".into()), ..Default::default() };
        assert_eq!(by_action.apply(&data).len(), 1);

        let by_month = AuditFilter { month: Some("2025-07".into()), ..Default::default() };
        assert_eq!(by_month.apply(&data).len(), 1);

        let unknown_action = AuditFilter { action: Some("Teleport".into()), ..Default::default() };
        assert!(unknown_action.apply(&data).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&sample(), NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
        assert_eq!(summary.total_activities, 4);
        assert_eq!(summary.todays_activities, 2);
        assert_eq!(summary.active_users, 2);
        assert_eq!(summary.failed_logins, 1);
        assert_eq!(summarize(&[], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), AuditSummary::default());
    }

    #[test]
    fn test_session_events_and_labels() {
        let session: Vec<AuditAction> = AuditAction::ALL
            .into_iter()
            .filter(|a| a.is_session_event())
            .collect();
        assert_eq!(
            session,
            vec![AuditAction::Login, AuditAction::Logout, AuditAction::Navigation]
        );
        for action in AuditAction::ALL {
            assert_eq!(AuditAction::from_label(action.label()), Some(action));
        }
        let dto: SessionEventDto = serde_json::from_str(r#"{"action":"Navigation"}"#).unwrap();
        assert_eq!(dto.action, AuditAction::Navigation);
        assert!(dto.details.is_empty());
    }

    #[test]
    fn test_known_users_dedup_ignores_case() {
        assert_eq!(known_users(&sample()), vec!["Kamil Alhassan", "Mike Johnson"]);
    }
}
