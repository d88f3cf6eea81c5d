use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d403_cycle_summary::CycleDashboardResponse;

use crate::dashboards::d403_cycle_summary::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/d403/cycles
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<CycleDashboardResponse>, StatusCode> {
    service::get_summary(state.gateway())
        .await
        .map(Json)
        .map_err(to_status)
}
