use contracts::dashboards::d401_role_dashboard::RoleDashboard;
use contracts::system::navigation::Role;

use crate::shared::api_utils::get_json;

pub async fn fetch_dashboard(role: Role) -> Result<RoleDashboard, String> {
    get_json(&format!("/api/d401/{}", role.as_str())).await
}
