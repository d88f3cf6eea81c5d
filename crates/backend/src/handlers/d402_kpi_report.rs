use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d402_kpi_report::{KpiReport, ReportRequest};

use crate::dashboards::d402_kpi_report::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/d402/report
pub async fn get_report(
    State(state): State<AppState>,
    Query(request): Query<ReportRequest>,
) -> Result<Json<KpiReport>, StatusCode> {
    service::get_report(state.gateway(), &request)
        .await
        .map(Json)
        .map_err(to_status)
}
