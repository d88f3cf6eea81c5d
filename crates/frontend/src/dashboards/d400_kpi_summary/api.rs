use contracts::dashboards::d400_kpi_summary::KpiDashboardResponse;
use contracts::domain::a001_kpi::KpiFilter;

use crate::shared::api_utils::{get_json, with_query};

pub async fn fetch_summary(filter: &KpiFilter) -> Result<KpiDashboardResponse, String> {
    get_json(&with_query("/api/d400/summary", filter)).await
}
