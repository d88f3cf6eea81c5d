use contracts::dashboards::d402_kpi_report::{KpiReport, ReportRequest};

use crate::shared::api_utils::{get_json, with_query};

pub async fn fetch_report(request: &ReportRequest) -> Result<KpiReport, String> {
    get_json(&with_query("/api/d402/report", request)).await
}
