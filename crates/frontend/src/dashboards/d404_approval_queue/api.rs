use contracts::dashboards::d404_approval_queue::ApprovalQueue;

use crate::shared::api_utils::get_json;

pub async fn fetch_queue() -> Result<ApprovalQueue, String> {
    get_json("/api/d404/approvals").await
}
