use contracts::dashboards::d403_cycle_summary::{self as summary, CycleDashboardResponse};

use crate::shared::data::DataGateway;
use crate::shared::error::ServiceResult;

pub async fn get_summary(gateway: &dyn DataGateway) -> ServiceResult<CycleDashboardResponse> {
    let cycles = gateway.fetch_cycles().await?;
    let summary = summary::summarize(&cycles);
    Ok(CycleDashboardResponse {
        cards: summary::stats_cards(&summary),
        summary,
    })
}
