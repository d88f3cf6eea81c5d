use chrono::NaiveDate;
use contracts::dashboards::d404_approval_queue::{self as queue, ApprovalQueue};

use crate::shared::data::DataGateway;
use crate::shared::error::ServiceResult;

pub async fn get_queue(gateway: &dyn DataGateway, today: NaiveDate) -> ServiceResult<ApprovalQueue> {
    let kpis = gateway.fetch_kpis().await?;
    Ok(queue::build(&kpis, today))
}
