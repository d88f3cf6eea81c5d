use chrono::Utc;
use contracts::dashboards::d401_role_dashboard::{self as dashboard, DashboardInputs, RoleDashboard};
use contracts::domain::a004_audit_entry as audit;
use contracts::system::navigation::Role;

use crate::shared::data::DataGateway;
use crate::shared::error::ServiceResult;

pub async fn get_dashboard(gateway: &dyn DataGateway, role: Role) -> ServiceResult<RoleDashboard> {
    let kpis = gateway.fetch_kpis().await?;
    let cycles = gateway.fetch_cycles().await?;
    let entries = gateway.fetch_audit_entries().await?;

    let inputs = DashboardInputs {
        kpis: &kpis,
        cycles: &cycles,
        audit: audit::summarize(&entries, Utc::now().date_naive()),
    };
    Ok(dashboard::build(role, &inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{seed, InMemoryGateway};

    #[tokio::test]
    async fn test_every_role_gets_a_dashboard() {
        let gateway = InMemoryGateway::new();
        seed::seed_demo_data(&gateway).await.unwrap();
        for role in Role::ALL {
            let dashboard = get_dashboard(&gateway, role).await.unwrap();
            assert!(!dashboard.cards.is_empty());
        }
        let auditor = get_dashboard(&gateway, Role::Auditor).await.unwrap();
        assert_eq!(auditor.cards[0].label, "Total Activities");
        assert!(auditor.cards[0].value > 0.0);
    }
}
