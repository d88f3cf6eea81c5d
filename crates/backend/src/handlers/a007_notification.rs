use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use contracts::domain::a007_notification::{NotificationFeed, NotificationId};
use serde_json::json;

use super::parse_id;
use crate::domain::a007_notification::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/notification
pub async fn feed(State(state): State<AppState>) -> Result<Json<NotificationFeed>, StatusCode> {
    service::feed(state.gateway(), Utc::now())
        .await
        .map(Json)
        .map_err(to_status)
}

/// POST /api/notification/:id/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), StatusCode> {
    let id: NotificationId = parse_id(&id)?;
    service::mark_read(state.gateway(), id)
        .await
        .map_err(to_status)
}

/// POST /api/notification/read-all
pub async fn mark_all_read(State(state): State<AppState>) -> Result<Json<serde_json::Value>, StatusCode> {
    let changed = service::mark_all_read(state.gateway())
        .await
        .map_err(to_status)?;
    Ok(Json(json!({ "updated": changed })))
}
