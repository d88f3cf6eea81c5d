use contracts::domain::a004_audit_entry::{AuditAction, AuditEntry, AuditFilter, AuditSummary, SessionEventDto};
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::shared::api_utils::{get_json, post_json_as, with_query};

const API_BASE: &str = "/api/audit";

#[derive(Debug, Clone, Deserialize)]
struct SessionEventReply {
    action: AuditAction,
}

pub async fn fetch_entries(filter: &AuditFilter) -> Result<Vec<AuditEntry>, String> {
    get_json(&with_query(API_BASE, filter)).await
}

pub async fn fetch_summary() -> Result<AuditSummary, String> {
    get_json(&format!("{}/summary", API_BASE)).await
}

/// Reports a login, logout or page visit. Returns the action the server
/// stored, which is `LoginFailed` for a login with an unknown role.
pub async fn report_session_event(
    action: AuditAction,
    details: String,
    role_tag: Option<String>,
) -> Result<AuditAction, String> {
    let event = SessionEventDto { action, details };
    let reply: SessionEventReply = post_json_as(API_BASE, &event, role_tag).await?;
    Ok(reply.action)
}

/// Fire-and-forget variant for event handlers. Failures are only logged.
pub fn report_in_background(action: AuditAction, details: String, role_tag: Option<String>) {
    spawn_local(async move {
        if let Err(e) = report_session_event(action, details, role_tag).await {
            log::error!("Failed to report {}: {}", action.label(), e);
        }
    });
}
