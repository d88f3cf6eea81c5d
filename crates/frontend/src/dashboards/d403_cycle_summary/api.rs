use contracts::dashboards::d403_cycle_summary::CycleDashboardResponse;

use crate::shared::api_utils::get_json;

pub async fn fetch_summary() -> Result<CycleDashboardResponse, String> {
    get_json("/api/d403/cycles").await
}
