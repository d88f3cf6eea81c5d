use contracts::dashboards::d405_goal_summary::GoalDashboardResponse;

use crate::shared::api_utils::get_json;

pub async fn fetch_summary() -> Result<GoalDashboardResponse, String> {
    get_json("/api/goal/summary").await
}
