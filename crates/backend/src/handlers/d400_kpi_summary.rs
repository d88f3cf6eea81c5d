use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_kpi_summary::KpiDashboardResponse;
use contracts::domain::a001_kpi::KpiFilter;

use crate::dashboards::d400_kpi_summary::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/d400/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Query(filter): Query<KpiFilter>,
) -> Result<Json<KpiDashboardResponse>, StatusCode> {
    service::get_summary(state.gateway(), &filter)
        .await
        .map(Json)
        .map_err(to_status)
}
