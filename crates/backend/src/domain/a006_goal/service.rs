use contracts::dashboards::d405_goal_summary::{self as summary, GoalDashboardResponse};
use contracts::domain::a004_audit_entry::AuditAction;
use contracts::domain::a006_goal::{Goal, GoalDto, GoalId};

use crate::domain::a004_audit_entry::service as audit;
use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::actor::Actor;

/// Goals sorted by due date. `owner` limits the list to one user's goals.
pub async fn list(gateway: &dyn DataGateway, owner: Option<&str>) -> ServiceResult<Vec<Goal>> {
    let mut goals: Vec<Goal> = gateway
        .fetch_goals()
        .await?
        .into_iter()
        .filter(|g| owner.map_or(true, |o| g.owner.eq_ignore_ascii_case(o.trim())))
        .collect();
    goals.sort_by_key(|g| (g.due_date, g.id));
    Ok(goals)
}

pub async fn get_by_id(gateway: &dyn DataGateway, id: GoalId) -> ServiceResult<Goal> {
    gateway
        .get_goal(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Goal {}", id)))
}

/// Create when the DTO carries no id, update otherwise. New goals belong to
/// the acting user.
pub async fn upsert(gateway: &dyn DataGateway, actor: &Actor, dto: GoalDto) -> ServiceResult<GoalId> {
    match dto.id {
        None => {
            let goal = Goal::new_for_insert(dto, &actor.name);
            goal.validate().map_err(ServiceError::Validation)?;
            let id = gateway.insert_goal(&goal).await?;
            audit::record(
                gateway,
                actor,
                AuditAction::GoalCreated,
                format!("Created goal '{}' ({})", goal.title, goal.alignment),
            )
            .await;
            Ok(id)
        }
        Some(id) => {
            let mut goal = get_by_id(gateway, id).await?;
            goal.update(&dto);
            goal.validate().map_err(ServiceError::Validation)?;
            if !gateway.update_goal(&goal).await? {
                return Err(ServiceError::NotFound(format!("Goal {}", id)));
            }
            audit::record(
                gateway,
                actor,
                AuditAction::GoalUpdated,
                format!(
                    "Updated goal '{}' ({}, {}%)",
                    goal.title,
                    goal.status.label(),
                    goal.progress
                ),
            )
            .await;
            Ok(id)
        }
    }
}

pub async fn get_summary(gateway: &dyn DataGateway, owner: Option<&str>) -> ServiceResult<GoalDashboardResponse> {
    let goals = list(gateway, owner).await?;
    let summary = summary::summarize(&goals);
    Ok(GoalDashboardResponse {
        cards: summary::stats_cards(&summary),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;
    use chrono::NaiveDate;
    use contracts::domain::a006_goal::{GoalPriority, GoalStatus};

    fn actor(name: &str) -> Actor {
        Actor {
            name: name.into(),
            role: "user".into(),
            ip_address: String::new(),
        }
    }

    fn dto(title: &str, due: (i32, u32, u32)) -> GoalDto {
        GoalDto {
            id: None,
            title: title.into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
            priority: GoalPriority::High,
            category: "Development".into(),
            progress: None,
            status: None,
            key_results: vec!["Attend six workshops".into()],
            alignment: "Q3 Goal".into(),
        }
    }

    #[tokio::test]
    async fn test_create_update_and_audit() {
        let gateway = InMemoryGateway::new();
        let esi = actor("Esi Owusu");
        let id = upsert(&gateway, &esi, dto("Leadership track", (2025, 9, 30)))
            .await
            .unwrap();
        let goal = get_by_id(&gateway, id).await.unwrap();
        assert_eq!(goal.owner, "Esi Owusu");
        assert_eq!(goal.status, GoalStatus::NotStarted);

        let mut change = GoalDto::from(&goal);
        change.status = Some(GoalStatus::Completed);
        upsert(&gateway, &esi, change).await.unwrap();
        let goal = get_by_id(&gateway, id).await.unwrap();
        assert_eq!(goal.progress, 100);

        let actions: Vec<AuditAction> = gateway
            .fetch_audit_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(actions, vec![AuditAction::GoalCreated, AuditAction::GoalUpdated]);
    }

    #[tokio::test]
    async fn test_invalid_and_missing_goals() {
        let gateway = InMemoryGateway::new();
        let mut bad = dto("Leadership track", (2025, 9, 30));
        bad.category = "Hobbies".into();
        assert!(matches!(
            upsert(&gateway, &actor("Esi Owusu"), bad).await,
            Err(ServiceError::Validation(_))
        ));

        let mut missing = dto("Leadership track", (2025, 9, 30));
        missing.id = Some(GoalId(7));
        assert!(matches!(
            upsert(&gateway, &actor("Esi Owusu"), missing).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(gateway.fetch_audit_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_owner_sorted_by_due_date() {
        let gateway = InMemoryGateway::new();
        upsert(&gateway, &actor("Esi Owusu"), dto("Later", (2025, 12, 1))).await.unwrap();
        upsert(&gateway, &actor("Kofi Antwi"), dto("Other", (2025, 8, 1))).await.unwrap();
        upsert(&gateway, &actor("Esi Owusu"), dto("Sooner", (2025, 9, 1))).await.unwrap();

        let titles: Vec<String> = list(&gateway, Some("esi owusu"))
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);
        assert_eq!(list(&gateway, None).await.unwrap().len(), 3);

        let dashboard = get_summary(&gateway, Some("Esi Owusu")).await.unwrap();
        assert_eq!(dashboard.summary.total, 2);
        assert_eq!(dashboard.summary.active, 2);
        assert_eq!(dashboard.cards.len(), 3);
    }
}
