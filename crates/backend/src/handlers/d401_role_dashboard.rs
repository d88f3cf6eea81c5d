use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d401_role_dashboard::RoleDashboard;
use contracts::system::navigation::Role;

use crate::dashboards::d401_role_dashboard::service;
use crate::shared::error::to_status;
use crate::shared::state::AppState;

/// GET /api/d401/:role
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<RoleDashboard>, StatusCode> {
    let role = Role::parse(&role).ok_or(StatusCode::BAD_REQUEST)?;
    service::get_dashboard(state.gateway(), role)
        .await
        .map(Json)
        .map_err(to_status)
}
