use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use contracts::domain::a004_audit_entry::{AuditEntry, AuditFilter, AuditSummary, SessionEventDto};
use serde_json::json;

use crate::domain::a004_audit_entry::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;
use crate::system::actor::Actor;

/// GET /api/audit
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AuditFilter>,
) -> Result<Json<Vec<AuditEntry>>, StatusCode> {
    service::list(state.gateway(), &filter)
        .await
        .map(Json)
        .map_err(to_status)
}

/// GET /api/audit/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<AuditSummary>, StatusCode> {
    service::summary(state.gateway(), Utc::now().date_naive())
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/audit
///
/// Session events (login, logout, navigation) reported by the client.
pub async fn record_session_event(
    State(state): State<AppState>,
    actor: Actor,
    Json(event): Json<SessionEventDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let action = service::record_session_event(state.gateway(), &actor, event)
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "action": action })))
}
