use chrono::Utc;
use contracts::domain::a001_kpi::{
    ApprovalDecision, ApprovalError, ApprovalRequest, Kpi, KpiDto, KpiFilter, KpiId,
};
use contracts::domain::a004_audit_entry::AuditAction;
use contracts::domain::a007_notification::{approval_event, kpi_events};

use crate::domain::a004_audit_entry::service as audit;
use crate::domain::a007_notification::service as notifications;
use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::actor::Actor;

/// KPIs matching the filter, in store order.
pub async fn list(gateway: &dyn DataGateway, filter: &KpiFilter) -> ServiceResult<Vec<Kpi>> {
    let kpis = gateway.fetch_kpis().await?;
    Ok(filter.apply(&kpis))
}

pub async fn get_by_id(gateway: &dyn DataGateway, id: KpiId) -> ServiceResult<Kpi> {
    gateway
        .get_kpi(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("KPI {}", id)))
}

pub async fn create(gateway: &dyn DataGateway, actor: &Actor, dto: KpiDto) -> ServiceResult<KpiId> {
    let kpi = Kpi::new_for_insert(dto);
    kpi.validate().map_err(ServiceError::Validation)?;

    let id = gateway.insert_kpi(&kpi).await?;
    audit::record(
        gateway,
        actor,
        AuditAction::KpiCreated,
        format!("Created KPI '{}' for {}", kpi.indicator, kpi.department),
    )
    .await;
    notifications::publish(gateway, kpi_events(None, &kpi)).await;
    Ok(id)
}

pub async fn update(gateway: &dyn DataGateway, actor: &Actor, dto: KpiDto) -> ServiceResult<KpiId> {
    let id = dto
        .id
        .ok_or_else(|| ServiceError::Validation("KPI id is required for update".into()))?;
    let before = get_by_id(gateway, id).await?;
    let mut kpi = before.clone();

    kpi.update(&dto);
    kpi.validate().map_err(ServiceError::Validation)?;

    if !gateway.update_kpi(&kpi).await? {
        return Err(ServiceError::NotFound(format!("KPI {}", id)));
    }
    audit::record(
        gateway,
        actor,
        AuditAction::KpiUpdated,
        format!("Updated KPI '{}' ({}, {}%)", kpi.indicator, kpi.status.label(), kpi.progress),
    )
    .await;
    notifications::publish(gateway, kpi_events(Some(&before), &kpi)).await;
    Ok(id)
}

/// Approves or rejects a pending KPI. Deciding twice is a conflict and a
/// rejection without a reason is a validation error.
pub async fn decide(
    gateway: &dyn DataGateway,
    actor: &Actor,
    id: KpiId,
    request: ApprovalRequest,
) -> ServiceResult<Kpi> {
    let mut kpi = get_by_id(gateway, id).await?;
    kpi.decide(request.decision, &actor.name, &request.note, Utc::now())
        .map_err(|e| match e {
            ApprovalError::AlreadyDecided(_) => ServiceError::Conflict(format!("{} ({})", e, kpi.indicator)),
            ApprovalError::MissingReason => ServiceError::Validation(e.to_string()),
        })?;

    if !gateway.update_kpi(&kpi).await? {
        return Err(ServiceError::NotFound(format!("KPI {}", id)));
    }
    let (action, verb) = match request.decision {
        ApprovalDecision::Approve => (AuditAction::KpiApproved, "Approved"),
        ApprovalDecision::Reject => (AuditAction::KpiRejected, "Rejected"),
    };
    let details = if kpi.approval.note.is_empty() {
        format!("{} KPI '{}'", verb, kpi.indicator)
    } else {
        format!("{} KPI '{}': {}", verb, kpi.indicator, kpi.approval.note)
    };
    audit::record(gateway, actor, action, details).await;
    notifications::publish(gateway, approval_event(&kpi).into_iter().collect()).await;
    Ok(kpi)
}

/// Create when the DTO carries no id, update otherwise.
pub async fn upsert(gateway: &dyn DataGateway, actor: &Actor, dto: KpiDto) -> ServiceResult<KpiId> {
    if dto.id.is_some() {
        update(gateway, actor, dto).await
    } else {
        create(gateway, actor, dto).await
    }
}

pub async fn delete(gateway: &dyn DataGateway, actor: &Actor, id: KpiId) -> ServiceResult<()> {
    let kpi = get_by_id(gateway, id).await?;
    if !gateway.delete_kpi(id).await? {
        return Err(ServiceError::NotFound(format!("KPI {}", id)));
    }
    audit::record(
        gateway,
        actor,
        AuditAction::KpiDeleted,
        format!("Deleted KPI '{}'", kpi.indicator),
    )
    .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;
    use contracts::domain::a001_kpi::{ApprovalStatus, KpiStatus};

    fn dto(indicator: &str, department: &str, start: &str) -> KpiDto {
        KpiDto {
            indicator: indicator.into(),
            department: department.into(),
            objective: format!("{} objective", indicator),
            target: "95%".into(),
            progress: Some(40),
            budget: Some(1000.0),
            timeline_start: start.into(),
            timeline_end: "2025-12-31".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_get_and_audit() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        let id = create(&gateway, &actor, dto("Uptime", "IT", "2025-01-01"))
            .await
            .unwrap();
        let kpi = get_by_id(&gateway, id).await.unwrap();
        assert_eq!(kpi.indicator, "Uptime");
        assert_eq!(kpi.status, KpiStatus::Ongoing);

        let audit = gateway.fetch_audit_entries().await.unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::KpiCreated);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid() {
        let gateway = InMemoryGateway::new();
        let mut bad = dto("Uptime", "IT", "2026-01-01");
        bad.timeline_end = "2025-01-01".into();
        let err = create(&gateway, &Actor::system(), bad).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(gateway.fetch_kpis().await.unwrap().is_empty());
        assert!(gateway.fetch_audit_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        let id = create(&gateway, &actor, dto("Uptime", "IT", "2025-01-01"))
            .await
            .unwrap();

        let mut change = dto("Uptime", "IT", "2025-01-01");
        change.id = Some(id);
        change.status = Some(KpiStatus::Achieved);
        change.progress = Some(100);
        upsert(&gateway, &actor, change).await.unwrap();
        let kpi = get_by_id(&gateway, id).await.unwrap();
        assert_eq!(kpi.status, KpiStatus::Achieved);
        assert_eq!(kpi.progress, 100);

        delete(&gateway, &actor, id).await.unwrap();
        assert!(matches!(
            get_by_id(&gateway, id).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            delete(&gateway, &actor, id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_writes_raise_notifications() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        let id = create(&gateway, &actor, dto("Uptime", "IT", "2025-01-01"))
            .await
            .unwrap();

        let mut change = dto("Uptime", "IT", "2025-01-01");
        change.id = Some(id);
        change.status = Some(KpiStatus::Achieved);
        update(&gateway, &actor, change.clone()).await.unwrap();
        // saving the same values again raises nothing new
        update(&gateway, &actor, change).await.unwrap();

        let titles: Vec<String> = gateway
            .fetch_notifications()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["KPI Created", "KPI Target Achieved"]);
    }

    #[tokio::test]
    async fn test_update_keeps_approval_and_text_fields() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        let mut first = dto("Uptime", "IT", "2025-01-01");
        first.comments = Some("Reviewed in July".into());
        let id = create(&gateway, &actor, first).await.unwrap();
        decide(&gateway, &actor, id, approve()).await.unwrap();

        let mut change = dto("Uptime", "IT", "2025-01-01");
        change.id = Some(id);
        change.progress = Some(55);
        update(&gateway, &actor, change).await.unwrap();

        let kpi = get_by_id(&gateway, id).await.unwrap();
        assert_eq!(kpi.progress, 55);
        assert_eq!(kpi.comments, "Reviewed in July");
        assert_eq!(kpi.approval.status, ApprovalStatus::Approved);
    }

    fn approve() -> ApprovalRequest {
        ApprovalRequest {
            decision: ApprovalDecision::Approve,
            note: String::new(),
        }
    }

    #[tokio::test]
    async fn test_decide_approve_audits_and_notifies() {
        let gateway = InMemoryGateway::new();
        let reviewer = Actor {
            name: "Kwame Asante".into(),
            role: "bde".into(),
            ip_address: String::new(),
        };
        let id = create(&gateway, &Actor::system(), dto("Uptime", "IT", "2025-01-01"))
            .await
            .unwrap();
        assert!(get_by_id(&gateway, id).await.unwrap().approval.is_pending());

        let kpi = decide(&gateway, &reviewer, id, approve()).await.unwrap();
        assert_eq!(kpi.approval.status, ApprovalStatus::Approved);
        assert_eq!(kpi.approval.decided_by, "Kwame Asante");
        assert_eq!(get_by_id(&gateway, id).await.unwrap().approval, kpi.approval);

        let audit = gateway.fetch_audit_entries().await.unwrap();
        let last = audit.last().unwrap();
        assert_eq!(last.action, AuditAction::KpiApproved);
        assert_eq!(last.user, "Kwame Asante");
        let notes = gateway.fetch_notifications().await.unwrap();
        assert_eq!(notes.last().unwrap().title, "KPI Approved");

        assert!(matches!(
            decide(&gateway, &reviewer, id, approve()).await,
            Err(ServiceError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_decide_reject_needs_reason() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        let id = create(&gateway, &actor, dto("Uptime", "IT", "2025-01-01"))
            .await
            .unwrap();
        let no_reason = ApprovalRequest {
            decision: ApprovalDecision::Reject,
            note: " ".into(),
        };
        assert!(matches!(
            decide(&gateway, &actor, id, no_reason).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(get_by_id(&gateway, id).await.unwrap().approval.is_pending());

        let with_reason = ApprovalRequest {
            decision: ApprovalDecision::Reject,
            note: "Target is not measurable".into(),
        };
        let kpi = decide(&gateway, &actor, id, with_reason).await.unwrap();
        assert_eq!(kpi.approval.status, ApprovalStatus::Rejected);
        let audit = gateway.fetch_audit_entries().await.unwrap();
        assert_eq!(audit.last().unwrap().action, AuditAction::KpiRejected);
        assert!(audit.last().unwrap().details.ends_with("Target is not measurable"));

        assert!(matches!(
            decide(&gateway, &actor, KpiId(99), approve()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let gateway = InMemoryGateway::new();
        let mut change = dto("Uptime", "IT", "2025-01-01");
        change.id = Some(KpiId(42));
        assert!(matches!(
            update(&gateway, &Actor::system(), change).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_applies_filter() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        create(&gateway, &actor, dto("Uptime", "IT", "2025-01-01")).await.unwrap();
        create(&gateway, &actor, dto("Turnover", "HR", "2024-06-01")).await.unwrap();

        let filter = KpiFilter::default().with_department("All").with_year("2025");
        let result = list(&gateway, &filter).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].department, "IT");

        let none = list(&gateway, &KpiFilter::default().with_status("At Risk"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
