use async_trait::async_trait;
use contracts::domain::a001_kpi::{Kpi, KpiId};
use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle};
use contracts::domain::a003_department::{Department, DepartmentId};
use contracts::domain::a004_audit_entry::AuditEntry;
use contracts::domain::a005_user::{User, UserId};
use contracts::domain::a006_goal::{Goal, GoalId};
use contracts::domain::a007_notification::{Notification, NotificationId};

/// Data access used by every service.
///
/// Inserts ignore the id carried by the record and return the one assigned by
/// the store. Updates and deletes report whether a record with that id existed.
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn fetch_kpis(&self) -> anyhow::Result<Vec<Kpi>>;
    async fn get_kpi(&self, id: KpiId) -> anyhow::Result<Option<Kpi>>;
    async fn insert_kpi(&self, kpi: &Kpi) -> anyhow::Result<KpiId>;
    async fn update_kpi(&self, kpi: &Kpi) -> anyhow::Result<bool>;
    async fn delete_kpi(&self, id: KpiId) -> anyhow::Result<bool>;

    async fn fetch_cycles(&self) -> anyhow::Result<Vec<PerformanceCycle>>;
    async fn get_cycle(&self, id: CycleId) -> anyhow::Result<Option<PerformanceCycle>>;
    async fn insert_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<CycleId>;
    async fn update_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<bool>;

    async fn fetch_departments(&self) -> anyhow::Result<Vec<Department>>;
    async fn insert_department(&self, department: &Department) -> anyhow::Result<DepartmentId>;

    /// Audit entries in insertion order.
    async fn fetch_audit_entries(&self) -> anyhow::Result<Vec<AuditEntry>>;
    async fn insert_audit_entry(&self, entry: &AuditEntry) -> anyhow::Result<()>;

    async fn fetch_users(&self) -> anyhow::Result<Vec<User>>;
    async fn insert_user(&self, user: &User) -> anyhow::Result<UserId>;

    async fn fetch_goals(&self) -> anyhow::Result<Vec<Goal>>;
    async fn get_goal(&self, id: GoalId) -> anyhow::Result<Option<Goal>>;
    async fn insert_goal(&self, goal: &Goal) -> anyhow::Result<GoalId>;
    async fn update_goal(&self, goal: &Goal) -> anyhow::Result<bool>;

    async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>>;
    async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<NotificationId>;
    async fn mark_notification_read(&self, id: NotificationId) -> anyhow::Result<bool>;
    /// Returns how many notifications changed from unread to read.
    async fn mark_all_notifications_read(&self) -> anyhow::Result<usize>;

    /// Name of the implementation, for startup logging.
    fn backend_name(&self) -> &'static str;
}
