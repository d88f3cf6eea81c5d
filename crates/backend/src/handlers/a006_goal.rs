use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d405_goal_summary::GoalDashboardResponse;
use contracts::domain::a006_goal::{Goal, GoalDto, GoalId};
use serde::Deserialize;
use serde_json::json;

use super::parse_id;
use crate::domain::a006_goal::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;
use crate::system::actor::Actor;

#[derive(Debug, Default, Deserialize)]
pub struct GoalQuery {
    #[serde(default)]
    pub owner: Option<String>,
}

/// GET /api/goal
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<GoalQuery>,
) -> Result<Json<Vec<Goal>>, StatusCode> {
    service::list(state.gateway(), query.owner.as_deref())
        .await
        .map(Json)
        .map_err(to_status)
}

/// GET /api/goal/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Goal>, StatusCode> {
    let id: GoalId = parse_id(&id)?;
    service::get_by_id(state.gateway(), id)
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/goal
pub async fn upsert(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<GoalDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let id = service::upsert(state.gateway(), &actor, dto)
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "id": id })))
}

/// GET /api/goal/summary
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<GoalQuery>,
) -> Result<Json<GoalDashboardResponse>, StatusCode> {
    service::get_summary(state.gateway(), query.owner.as_deref())
        .await
        .map(Json)
        .map_err(to_status)
}
