use axum::{extract::Path, Json};
use contracts::system::navigation::{self, Navigation};

/// GET /api/navigation/:role
///
/// Unknown roles resolve to an empty navigation rather than an error.
pub async fn get_navigation(Path(role): Path<String>) -> Json<Navigation> {
    Json(navigation::resolve(&role))
}
