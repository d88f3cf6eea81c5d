use contracts::domain::a006_goal::{Goal, GoalDto, GoalId};

use crate::shared::api_utils::{get_json, post_json, IdResponse};

const API_BASE: &str = "/api/goal";

pub async fn fetch_goals() -> Result<Vec<Goal>, String> {
    get_json(API_BASE).await
}

/// Creates the goal when `dto.id` is empty, updates it otherwise.
pub async fn save(dto: &GoalDto) -> Result<GoalId, String> {
    let response: IdResponse = post_json(API_BASE, dto).await?;
    Ok(GoalId(response.id))
}
