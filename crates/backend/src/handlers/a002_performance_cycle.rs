use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle, PerformanceCycleDto};
use serde_json::json;

use super::parse_id;
use crate::domain::a002_performance_cycle::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;
use crate::system::actor::Actor;

/// GET /api/performance_cycle
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PerformanceCycle>>, StatusCode> {
    service::list(state.gateway())
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/performance_cycle
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<PerformanceCycleDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let id = service::create(state.gateway(), &actor, dto)
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "id": id })))
}

/// POST /api/performance_cycle/:id/advance
pub async fn advance(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Result<Json<PerformanceCycle>, StatusCode> {
    let id: CycleId = parse_id(&id)?;
    service::advance(state.gateway(), &actor, id)
        .await
        .map(Json)
        .map_err(to_status)
}
