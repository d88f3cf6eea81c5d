use chrono::Utc;
use contracts::dashboards::d402_kpi_report::{build_report, KpiReport, ReportRequest};

use crate::shared::data::DataGateway;
use crate::shared::error::ServiceResult;

pub async fn get_report(gateway: &dyn DataGateway, request: &ReportRequest) -> ServiceResult<KpiReport> {
    let kpis = gateway.fetch_kpis().await?;
    let departments = gateway.fetch_departments().await?;
    Ok(build_report(request, &kpis, &departments, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{seed, InMemoryGateway};

    #[tokio::test]
    async fn test_report_for_department() {
        let gateway = InMemoryGateway::new();
        seed::seed_demo_data(&gateway).await.unwrap();
        let request = ReportRequest {
            department: Some("Operations".into()),
            year: Some("All Years".into()),
        };
        let report = get_report(&gateway, &request).await.unwrap();
        assert_eq!(report.title, "KPI Progress Report for Operations (All Years)");
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].budget_utilized, 7_800_000.0);
    }
}
