use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a003_department::{Department, DepartmentSummary};
use serde_json::json;

use crate::domain::a003_department::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/department
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Department>>, StatusCode> {
    service::list(state.gateway())
        .await
        .map(Json)
        .map_err(to_status)
}

/// GET /api/department/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<DepartmentSummary>, StatusCode> {
    service::summary(state.gateway())
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/department
pub async fn create(
    State(state): State<AppState>,
    Json(department): Json<Department>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let id = service::create(state.gateway(), department)
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "id": id })))
}
