use chrono::NaiveDate;
use contracts::domain::a004_audit_entry::{
    self as audit, AuditAction, AuditEntry, AuditFilter, AuditSummary, SessionEventDto,
};
use contracts::system::navigation::Role;

use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::actor::Actor;

/// Appends an audit entry. A failed write is logged and does not fail the
/// operation that triggered it.
pub async fn record(gateway: &dyn DataGateway, actor: &Actor, action: AuditAction, details: impl Into<String>) {
    let entry = AuditEntry::new(actor.name.clone(), actor.role.clone(), action, details)
        .with_ip(actor.ip_address.clone());
    tracing::info!(
        user = %entry.user,
        action = entry.action.label(),
        "{}",
        entry.details
    );
    if let Err(e) = gateway.insert_audit_entry(&entry).await {
        tracing::warn!("Failed to write audit entry: {:#}", e);
    }
}

/// Records a login, logout or page visit reported by the client and returns
/// the action actually stored. A login whose role tag is not recognised is
/// stored as a failed login.
pub async fn record_session_event(
    gateway: &dyn DataGateway,
    actor: &Actor,
    event: SessionEventDto,
) -> ServiceResult<AuditAction> {
    if !event.action.is_session_event() {
        return Err(ServiceError::Validation(format!(
            "'{}' is not a session event",
            event.action.label()
        )));
    }
    let action = match event.action {
        AuditAction::Login if Role::parse(&actor.role).is_none() => AuditAction::LoginFailed,
        other => other,
    };
    let details = match (action, event.details.trim()) {
        (AuditAction::LoginFailed, _) => format!("Unknown role '{}'", actor.role),
        (AuditAction::Login, "") => "Signed in".to_string(),
        (AuditAction::Logout, "") => "Signed out".to_string(),
        (_, "") => "Opened a page".to_string(),
        (_, given) => given.to_string(),
    };
    record(gateway, actor, action, details).await;
    Ok(action)
}

/// Filtered audit log, newest first.
pub async fn list(gateway: &dyn DataGateway, filter: &AuditFilter) -> ServiceResult<Vec<AuditEntry>> {
    let entries = gateway.fetch_audit_entries().await?;
    Ok(filter.apply(&entries))
}

pub async fn summary(gateway: &dyn DataGateway, today: NaiveDate) -> ServiceResult<AuditSummary> {
    let entries = gateway.fetch_audit_entries().await?;
    Ok(audit::summarize(&entries, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;
    use chrono::Utc;

    #[tokio::test]
    async fn test_record_and_list() {
        let gateway = InMemoryGateway::new();
        let actor = Actor {
            name: "Mike Johnson".into(),
            role: "admin".into(),
            ip_address: "10.0.0.7".into(),
        };
        record(&gateway, &actor, AuditAction::Login, "Signed in").await;
        record(&gateway, &Actor::system(), AuditAction::DataExport, "Exported 3 KPIs").await;

        let all = list(&gateway, &AuditFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        let mike = all.iter().find(|e| e.user == "Mike Johnson").unwrap();
        assert_eq!(mike.ip_address, "10.0.0.7");
        assert_eq!(mike.role, "admin");

        let only_mike = AuditFilter {
            user: Some("Mike Johnson".into()),
            ..Default::default()
        };
        assert_eq!(list(&gateway, &only_mike).await.unwrap().len(), 1);

        let summary = summary(&gateway, Utc::now().date_naive()).await.unwrap();
        assert_eq!(summary.total_activities, 2);
        assert_eq!(summary.todays_activities, 2);
        assert_eq!(summary.active_users, 2);
    }

    fn session(role: &str) -> Actor {
        Actor {
            name: "Head of Department".into(),
            role: role.into(),
            ip_address: "192.168.1.10".into(),
        }
    }

    fn event(action: AuditAction, details: &str) -> SessionEventDto {
        SessionEventDto {
            action,
            details: details.into(),
        }
    }

    #[tokio::test]
    async fn test_login_logout_and_navigation_are_recorded() {
        let gateway = InMemoryGateway::new();
        let actor = session("hod");
        let stored = record_session_event(&gateway, &actor, event(AuditAction::Login, ""))
            .await
            .unwrap();
        assert_eq!(stored, AuditAction::Login);
        record_session_event(&gateway, &actor, event(AuditAction::Navigation, "Opened /kpi-dashboard"))
            .await
            .unwrap();
        record_session_event(&gateway, &actor, event(AuditAction::Logout, ""))
            .await
            .unwrap();

        let entries = gateway.fetch_audit_entries().await.unwrap();
        let got: Vec<(AuditAction, &str)> = entries
            .iter()
            .map(|e| (e.action, e.details.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (AuditAction::Login, "Signed in"),
                (AuditAction::Navigation, "Opened /kpi-dashboard"),
                (AuditAction::Logout, "Signed out"),
            ]
        );
        assert!(entries.iter().all(|e| e.ip_address == "192.168.1.10"));
    }

    #[tokio::test]
    async fn test_login_with_unknown_role_is_failed_login() {
        let gateway = InMemoryGateway::new();
        let stored = record_session_event(&gateway, &session("root"), event(AuditAction::Login, ""))
            .await
            .unwrap();
        assert_eq!(stored, AuditAction::LoginFailed);
        let entries = gateway.fetch_audit_entries().await.unwrap();
        assert_eq!(entries[0].details, "Unknown role 'root'");
        let summary = summary(&gateway, Utc::now().date_naive()).await.unwrap();
        assert_eq!(summary.failed_logins, 1);

        // no role header at all
        let stored = record_session_event(&gateway, &Actor::system(), event(AuditAction::Login, ""))
            .await
            .unwrap();
        assert_eq!(stored, AuditAction::LoginFailed);
    }

    #[tokio::test]
    async fn test_clients_cannot_report_other_actions() {
        let gateway = InMemoryGateway::new();
        for action in [AuditAction::KpiDeleted, AuditAction::LoginFailed, AuditAction::DataExport] {
            let err = record_session_event(&gateway, &session("admin"), event(action, "forged"))
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
        assert!(gateway.fetch_audit_entries().await.unwrap().is_empty());
    }
}
