use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a005_user::{User, UserDto};
use serde_json::json;

use crate::domain::a005_user::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;
use crate::system::actor::Actor;

/// GET /api/user
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, StatusCode> {
    service::list(state.gateway())
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/user
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(dto): Json<UserDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let id = service::create(state.gateway(), &actor, dto)
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "id": id })))
}
