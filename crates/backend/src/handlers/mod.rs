pub mod a001_kpi;
pub mod a002_performance_cycle;
pub mod a003_department;
pub mod a004_audit_entry;
pub mod a005_user;
pub mod a006_goal;
pub mod a007_notification;
pub mod d400_kpi_summary;
pub mod d401_role_dashboard;
pub mod d402_kpi_report;
pub mod d403_cycle_summary;
pub mod d404_approval_queue;
pub mod navigation;

use axum::http::StatusCode;
use contracts::domain::common::AggregateId;

/// Parses an id path segment, answering 400 for anything malformed.
pub(crate) fn parse_id<T: AggregateId>(id: &str) -> Result<T, StatusCode> {
    T::from_string(id).map_err(|_| StatusCode::BAD_REQUEST)
}
