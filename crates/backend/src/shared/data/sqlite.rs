use async_trait::async_trait;
use contracts::domain::a001_kpi::{Kpi, KpiId};
use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle};
use contracts::domain::a003_department::{Department, DepartmentId};
use contracts::domain::a004_audit_entry::AuditEntry;
use contracts::domain::a005_user::{User, UserId};
use contracts::domain::a006_goal::{Goal, GoalId};
use contracts::domain::a007_notification::{Notification, NotificationId};

use super::gateway::DataGateway;
use crate::domain::{
    a001_kpi, a002_performance_cycle, a003_department, a004_audit_entry, a005_user, a006_goal,
    a007_notification,
};

/// Gateway over the sea-orm repositories. Requires
/// [`initialize_database`](super::db::initialize_database) to have run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteGateway;

#[async_trait]
impl DataGateway for SqliteGateway {
    async fn fetch_kpis(&self) -> anyhow::Result<Vec<Kpi>> {
        a001_kpi::repository::list_all().await
    }

    async fn get_kpi(&self, id: KpiId) -> anyhow::Result<Option<Kpi>> {
        a001_kpi::repository::get_by_id(id).await
    }

    async fn insert_kpi(&self, kpi: &Kpi) -> anyhow::Result<KpiId> {
        a001_kpi::repository::insert(kpi).await
    }

    async fn update_kpi(&self, kpi: &Kpi) -> anyhow::Result<bool> {
        a001_kpi::repository::update(kpi).await
    }

    async fn delete_kpi(&self, id: KpiId) -> anyhow::Result<bool> {
        a001_kpi::repository::delete(id).await
    }

    async fn fetch_cycles(&self) -> anyhow::Result<Vec<PerformanceCycle>> {
        a002_performance_cycle::repository::list_all().await
    }

    async fn get_cycle(&self, id: CycleId) -> anyhow::Result<Option<PerformanceCycle>> {
        a002_performance_cycle::repository::get_by_id(id).await
    }

    async fn insert_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<CycleId> {
        a002_performance_cycle::repository::insert(cycle).await
    }

    async fn update_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<bool> {
        a002_performance_cycle::repository::update(cycle).await
    }

    async fn fetch_departments(&self) -> anyhow::Result<Vec<Department>> {
        a003_department::repository::list_all().await
    }

    async fn insert_department(&self, department: &Department) -> anyhow::Result<DepartmentId> {
        a003_department::repository::insert(department).await
    }

    async fn fetch_audit_entries(&self) -> anyhow::Result<Vec<AuditEntry>> {
        a004_audit_entry::repository::list_all().await
    }

    async fn insert_audit_entry(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        a004_audit_entry::repository::insert(entry).await
    }

    async fn fetch_users(&self) -> anyhow::Result<Vec<User>> {
        a005_user::repository::list_all().await
    }

    async fn insert_user(&self, user: &User) -> anyhow::Result<UserId> {
        a005_user::repository::insert(user).await
    }

    async fn fetch_goals(&self) -> anyhow::Result<Vec<Goal>> {
        a006_goal::repository::list_all().await
    }

    async fn get_goal(&self, id: GoalId) -> anyhow::Result<Option<Goal>> {
        a006_goal::repository::get_by_id(id).await
    }

    async fn insert_goal(&self, goal: &Goal) -> anyhow::Result<GoalId> {
        a006_goal::repository::insert(goal).await
    }

    async fn update_goal(&self, goal: &Goal) -> anyhow::Result<bool> {
        a006_goal::repository::update(goal).await
    }

    async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>> {
        a007_notification::repository::list_all().await
    }

    async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<NotificationId> {
        a007_notification::repository::insert(notification).await
    }

    async fn mark_notification_read(&self, id: NotificationId) -> anyhow::Result<bool> {
        a007_notification::repository::mark_read(id).await
    }

    async fn mark_all_notifications_read(&self) -> anyhow::Result<usize> {
        a007_notification::repository::mark_all_read().await
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
