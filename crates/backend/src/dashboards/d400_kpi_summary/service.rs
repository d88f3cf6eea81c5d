use contracts::dashboards::d400_kpi_summary::{self as summary, KpiDashboardResponse};
use contracts::domain::a001_kpi::filter::available_years;
use contracts::domain::a001_kpi::KpiFilter;

use crate::shared::data::DataGateway;
use crate::shared::error::ServiceResult;

/// Summary and stat cards for the KPIs matching `filter`.
pub async fn get_summary(gateway: &dyn DataGateway, filter: &KpiFilter) -> ServiceResult<KpiDashboardResponse> {
    let kpis = gateway.fetch_kpis().await?;
    let departments = gateway.fetch_departments().await?;

    let selected = filter.apply(&kpis);
    let summary = summary::summarize(&selected, &departments);
    let cards = summary::stats_cards(&summary);
    Ok(KpiDashboardResponse {
        summary,
        cards,
        years: available_years(&kpis),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{seed, InMemoryGateway};

    #[tokio::test]
    async fn test_summary_over_seed_data() {
        let gateway = InMemoryGateway::new();
        seed::seed_demo_data(&gateway).await.unwrap();

        let all = get_summary(&gateway, &KpiFilter::default()).await.unwrap();
        let total = gateway.fetch_kpis().await.unwrap().len();
        assert_eq!(all.summary.counts.total, total);
        assert_eq!(all.cards.len(), 4);
        assert!(all.years.contains(&2025));

        let it = get_summary(&gateway, &KpiFilter::default().with_department("IT"))
            .await
            .unwrap();
        assert!(it.summary.counts.total < total);
        assert!(it.summary.budgets.iter().all(|b| b.department == "IT"));
    }

    #[tokio::test]
    async fn test_empty_store_is_zero() {
        let gateway = InMemoryGateway::new();
        let response = get_summary(&gateway, &KpiFilter::default()).await.unwrap();
        assert_eq!(response.summary.counts.total, 0);
        assert!(response.years.is_empty());
    }
}
