use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use contracts::dashboards::d404_approval_queue::ApprovalQueue;

use crate::dashboards::d404_approval_queue::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/d404/approvals
pub async fn get_queue(State(state): State<AppState>) -> Result<Json<ApprovalQueue>, StatusCode> {
    service::get_queue(state.gateway(), Utc::now().date_naive())
        .await
        .map(Json)
        .map_err(to_status)
}
