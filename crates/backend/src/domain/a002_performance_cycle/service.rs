use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle, PerformanceCycleDto};
use contracts::domain::a004_audit_entry::AuditAction;

use crate::domain::a004_audit_entry::service as audit;
use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::actor::Actor;

pub async fn list(gateway: &dyn DataGateway) -> ServiceResult<Vec<PerformanceCycle>> {
    Ok(gateway.fetch_cycles().await?)
}

pub async fn create(
    gateway: &dyn DataGateway,
    actor: &Actor,
    dto: PerformanceCycleDto,
) -> ServiceResult<CycleId> {
    let cycle = PerformanceCycle::new_for_insert(dto);
    cycle.validate().map_err(ServiceError::Validation)?;

    let id = gateway.insert_cycle(&cycle).await?;
    audit::record(
        gateway,
        actor,
        AuditAction::CycleCreated,
        format!("Created {} cycle '{}'", cycle.cycle_type.label(), cycle.name),
    )
    .await;
    Ok(id)
}

/// Moves the cycle one step along Draft -> Active -> Completed.
pub async fn advance(gateway: &dyn DataGateway, actor: &Actor, id: CycleId) -> ServiceResult<PerformanceCycle> {
    let mut cycle = gateway
        .get_cycle(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Performance cycle {}", id)))?;

    let previous = cycle.status;
    cycle.advance().map_err(ServiceError::Conflict)?;

    if !gateway.update_cycle(&cycle).await? {
        return Err(ServiceError::NotFound(format!("Performance cycle {}", id)));
    }
    audit::record(
        gateway,
        actor,
        AuditAction::CycleAdvanced,
        format!(
            "Cycle '{}' moved from {} to {}",
            cycle.name,
            previous.label(),
            cycle.status.label()
        ),
    )
    .await;
    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;
    use chrono::NaiveDate;
    use contracts::domain::a002_performance_cycle::{CycleStatus, CycleType};

    fn dto() -> PerformanceCycleDto {
        PerformanceCycleDto {
            name: "Annual Review 2025".into(),
            cycle_type: CycleType::Annual,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            participants: Some(120),
        }
    }

    #[tokio::test]
    async fn test_advance_through_ladder() {
        let gateway = InMemoryGateway::new();
        let actor = Actor::system();
        let id = create(&gateway, &actor, dto()).await.unwrap();

        assert_eq!(advance(&gateway, &actor, id).await.unwrap().status, CycleStatus::Active);
        let done = advance(&gateway, &actor, id).await.unwrap();
        assert_eq!(done.status, CycleStatus::Completed);
        assert_eq!(done.progress, 100);

        assert!(matches!(
            advance(&gateway, &actor, id).await,
            Err(ServiceError::Conflict(_))
        ));
        let stored = gateway.get_cycle(id).await.unwrap().unwrap();
        assert_eq!(stored.status, CycleStatus::Completed);
    }

    #[tokio::test]
    async fn test_advance_unknown_cycle() {
        let gateway = InMemoryGateway::new();
        assert!(matches!(
            advance(&gateway, &Actor::system(), CycleId(9)).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_reversed_dates() {
        let gateway = InMemoryGateway::new();
        let mut bad = dto();
        std::mem::swap(&mut bad.start_date, &mut bad.end_date);
        assert!(matches!(
            create(&gateway, &Actor::system(), bad).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(list(&gateway).await.unwrap().is_empty());
    }
}
