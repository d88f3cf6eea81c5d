use async_trait::async_trait;
use contracts::domain::a001_kpi::{Kpi, KpiId};
use contracts::domain::a002_performance_cycle::{CycleId, PerformanceCycle};
use contracts::domain::a003_department::{Department, DepartmentId};
use contracts::domain::a004_audit_entry::AuditEntry;
use contracts::domain::a005_user::{User, UserId};
use contracts::domain::a006_goal::{Goal, GoalId};
use contracts::domain::a007_notification::{Notification, NotificationId};
use tokio::sync::RwLock;

use super::gateway::DataGateway;

/// Growable table with sequential integer ids starting at 1.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Debug, Default)]
struct Tables {
    kpis: Table<Kpi>,
    cycles: Table<PerformanceCycle>,
    departments: Table<Department>,
    users: Table<User>,
    goals: Table<Goal>,
    notifications: Table<Notification>,
    audit: Vec<AuditEntry>,
}

/// Process-local store. Used by the tests and by `backend = "memory"`.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    tables: RwLock<Tables>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataGateway for InMemoryGateway {
    async fn fetch_kpis(&self) -> anyhow::Result<Vec<Kpi>> {
        Ok(self.tables.read().await.kpis.rows.clone())
    }

    async fn get_kpi(&self, id: KpiId) -> anyhow::Result<Option<Kpi>> {
        let tables = self.tables.read().await;
        Ok(tables.kpis.rows.iter().find(|k| k.id == id).cloned())
    }

    async fn insert_kpi(&self, kpi: &Kpi) -> anyhow::Result<KpiId> {
        let mut tables = self.tables.write().await;
        let id = KpiId(tables.kpis.allocate());
        let mut row = kpi.clone();
        row.id = id;
        tables.kpis.rows.push(row);
        Ok(id)
    }

    async fn update_kpi(&self, kpi: &Kpi) -> anyhow::Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.kpis.rows.iter_mut().find(|k| k.id == kpi.id) {
            Some(row) => {
                *row = kpi.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_kpi(&self, id: KpiId) -> anyhow::Result<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.kpis.rows.len();
        tables.kpis.rows.retain(|k| k.id != id);
        Ok(tables.kpis.rows.len() != before)
    }

    async fn fetch_cycles(&self) -> anyhow::Result<Vec<PerformanceCycle>> {
        Ok(self.tables.read().await.cycles.rows.clone())
    }

    async fn get_cycle(&self, id: CycleId) -> anyhow::Result<Option<PerformanceCycle>> {
        let tables = self.tables.read().await;
        Ok(tables.cycles.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<CycleId> {
        let mut tables = self.tables.write().await;
        let id = CycleId(tables.cycles.allocate());
        let mut row = cycle.clone();
        row.id = id;
        tables.cycles.rows.push(row);
        Ok(id)
    }

    async fn update_cycle(&self, cycle: &PerformanceCycle) -> anyhow::Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.cycles.rows.iter_mut().find(|c| c.id == cycle.id) {
            Some(row) => {
                *row = cycle.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn fetch_departments(&self) -> anyhow::Result<Vec<Department>> {
        Ok(self.tables.read().await.departments.rows.clone())
    }

    async fn insert_department(&self, department: &Department) -> anyhow::Result<DepartmentId> {
        let mut tables = self.tables.write().await;
        let id = DepartmentId(tables.departments.allocate());
        let mut row = department.clone();
        row.id = id;
        tables.departments.rows.push(row);
        Ok(id)
    }

    async fn fetch_audit_entries(&self) -> anyhow::Result<Vec<AuditEntry>> {
        Ok(self.tables.read().await.audit.clone())
    }

    async fn insert_audit_entry(&self, entry: &AuditEntry) -> anyhow::Result<()> {
        self.tables.write().await.audit.push(entry.clone());
        Ok(())
    }

    async fn fetch_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.tables.read().await.users.rows.clone())
    }

    async fn insert_user(&self, user: &User) -> anyhow::Result<UserId> {
        let mut tables = self.tables.write().await;
        let id = UserId(tables.users.allocate());
        let mut row = user.clone();
        row.id = id;
        tables.users.rows.push(row);
        Ok(id)
    }

    async fn fetch_goals(&self) -> anyhow::Result<Vec<Goal>> {
        Ok(self.tables.read().await.goals.rows.clone())
    }

    async fn get_goal(&self, id: GoalId) -> anyhow::Result<Option<Goal>> {
        let tables = self.tables.read().await;
        Ok(tables.goals.rows.iter().find(|g| g.id == id).cloned())
    }

    async fn insert_goal(&self, goal: &Goal) -> anyhow::Result<GoalId> {
        let mut tables = self.tables.write().await;
        let id = GoalId(tables.goals.allocate());
        let mut row = goal.clone();
        row.id = id;
        tables.goals.rows.push(row);
        Ok(id)
    }

    async fn update_goal(&self, goal: &Goal) -> anyhow::Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.goals.rows.iter_mut().find(|g| g.id == goal.id) {
            Some(row) => {
                *row = goal.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn fetch_notifications(&self) -> anyhow::Result<Vec<Notification>> {
        Ok(self.tables.read().await.notifications.rows.clone())
    }

    async fn insert_notification(&self, notification: &Notification) -> anyhow::Result<NotificationId> {
        let mut tables = self.tables.write().await;
        let id = NotificationId(tables.notifications.allocate());
        let mut row = notification.clone();
        row.id = id;
        tables.notifications.rows.push(row);
        Ok(id)
    }

    async fn mark_notification_read(&self, id: NotificationId) -> anyhow::Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.notifications.rows.iter_mut().find(|n| n.id == id) {
            Some(row) => {
                row.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_notifications_read(&self) -> anyhow::Result<usize> {
        let mut tables = self.tables.write().await;
        let mut changed = 0;
        for row in tables.notifications.rows.iter_mut().filter(|n| !n.read) {
            row.read = true;
            changed += 1;
        }
        Ok(changed)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
