use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::domain::a001_kpi::{ApprovalRequest, ImportReport, Kpi, KpiDto, KpiFilter, KpiId};
use serde_json::json;

use super::parse_id;
use crate::domain::a001_kpi::{csv_import, service};
use crate::shared::error::to_status;
use crate::shared::state::AppState;
use crate::system::actor::Actor;

/// GET /api/kpi
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<KpiFilter>,
) -> Result<Json<Vec<Kpi>>, StatusCode> {
    service::list(state.gateway(), &filter)
        .await
        .map(Json)
        .map_err(to_status)
}

/// GET /api/kpi/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Kpi>, StatusCode> {
    let id: KpiId = parse_id(&id)?;
    service::get_by_id(state.gateway(), id)
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/kpi
pub async fn upsert(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<KpiDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let id = service::upsert(state.gateway(), &actor, dto)
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/kpi/:id
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<(), StatusCode> {
    let id: KpiId = parse_id(&id)?;
    service::delete(state.gateway(), &actor, id)
        .await
        .map_err(to_status)
}

/// POST /api/kpi/:id/approval
pub async fn decide(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
    Json(request): Json<ApprovalRequest>,
) -> Result<Json<Kpi>, StatusCode> {
    let id: KpiId = parse_id(&id)?;
    service::decide(state.gateway(), &actor, id, request)
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/kpi/import
///
/// Body is the raw CSV text.
pub async fn import(
    State(state): State<AppState>,
    actor: Actor,
    body: String,
) -> Result<Json<ImportReport>, StatusCode> {
    csv_import::import(state.gateway(), &actor, &body)
        .await
        .map(Json)
        .map_err(to_status)
}

/// GET /api/kpi/export
pub async fn export(
    State(state): State<AppState>,
    actor: Actor,
    Query(filter): Query<KpiFilter>,
) -> Result<impl IntoResponse, StatusCode> {
    let body = csv_import::export(state.gateway(), &actor, &filter)
        .await
        .map_err(to_status)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"kpis.csv\""),
        ],
        body,
    ))
}
