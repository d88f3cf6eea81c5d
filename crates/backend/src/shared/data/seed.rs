use chrono::{NaiveDate, TimeZone, Utc};
use contracts::domain::a001_kpi::{Approval, Frequency, Kpi, KpiId, KpiStatus};
use contracts::domain::a002_performance_cycle::{CycleId, CycleStatus, CycleType, PerformanceCycle};
use contracts::domain::a003_department::{Department, DepartmentId};
use contracts::domain::a004_audit_entry::{AuditAction, AuditEntry};
use contracts::domain::a005_user::{User, UserId};
use contracts::domain::a006_goal::{Goal, GoalId, GoalPriority, GoalStatus};
use contracts::domain::a007_notification::{Notification, NotificationKind};
use contracts::system::navigation::Role;

use super::gateway::DataGateway;

// (name, head, staff, budget total, budget utilized, description)
const DEPARTMENTS: &[(&str, &str, u32, f64, f64, &str)] = &[
    ("Finance", "Ama Mensah", 7, 2_500_000.0, 2_200_000.0, "Financial planning, reporting and treasury"),
    ("Operations", "Kojo Owusu", 20, 8_000_000.0, 7_800_000.0, "Depots, logistics and plant maintenance"),
    ("Marketing", "Kofi Antwi", 10, 4_000_000.0, 3_800_000.0, "Brand, campaigns and market research"),
    ("HR", "Akua Frimpong", 6, 2_000_000.0, 1_900_000.0, "People, training and recruitment"),
    ("IT", "Yaw Boateng", 8, 3_500_000.0, 2_500_000.0, "Infrastructure, security and digital services"),
    ("Sales", "Kwame Asante", 12, 5_000_000.0, 4_600_000.0, "Retail and commercial sales"),
];

// (indicator, department, objective, target, baseline, status, progress, budget, frequency, start, end)
type KpiRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    KpiStatus,
    u8,
    f64,
    Frequency,
    &'static str,
    &'static str,
);

const KPIS: &[KpiRow] = &[
    ("Equipment Uptime Percentage", "Operations", "Maintain optimal equipment performance and minimize downtime", "95%", "88%", KpiStatus::Ongoing, 72, 150_000.0, Frequency::Weekly, "2025-01-01", "2025-07-31"),
    ("Safety Incident Rate", "Operations", "Achieve zero workplace safety incidents", "Zero incidents", "2 incidents/month", KpiStatus::Achieved, 100, 75_000.0, Frequency::Monthly, "2025-01-01", "2025-07-31"),
    ("Production Efficiency", "Operations", "Increase throughput at the depots", "90%", "82%", KpiStatus::Ongoing, 64, 200_000.0, Frequency::Weekly, "2025-01-01", "2025-07-31"),
    ("Quality Control Pass Rate", "Operations", "Raise product quality pass rate", "98%", "94%", KpiStatus::Achieved, 100, 80_000.0, Frequency::Weekly, "2024-01-01", "2024-12-31"),
    ("Monthly Revenue Growth", "Sales", "Grow monthly revenue across all regions", "12%", "8%", KpiStatus::Achieved, 100, 300_000.0, Frequency::Monthly, "2025-01-01", "2025-07-31"),
    ("Customer Acquisition Rate", "Sales", "Acquire new retail and commercial customers", "100 new customers", "65 customers", KpiStatus::Ongoing, 58, 180_000.0, Frequency::Monthly, "2025-01-01", "2025-07-31"),
    ("Market Share Expansion", "Sales", "Expand market share in the northern region", "5%", "18%", KpiStatus::AtRisk, 31, 250_000.0, Frequency::Quarterly, "2025-02-01", "2025-12-31"),
    ("Budget Variance Analysis", "Finance", "Keep departmental spend within budget", "±5%", "±8%", KpiStatus::Achieved, 100, 30_000.0, Frequency::Monthly, "2025-01-01", "2025-07-31"),
    ("Cash Flow Management", "Finance", "Shorten the cash conversion cycle", "30 days", "45 days", KpiStatus::Ongoing, 81, 40_000.0, Frequency::Weekly, "2025-01-01", "2025-07-31"),
    ("Financial Reporting Accuracy", "Finance", "Publish error-free monthly financial reports", "100%", "95%", KpiStatus::Missed, 88, 60_000.0, Frequency::Monthly, "2024-01-01", "2024-12-31"),
    ("System Uptime Percentage", "IT", "Keep core business systems available", "99.9%", "99.2%", KpiStatus::Achieved, 100, 180_000.0, Frequency::Weekly, "2025-01-01", "2025-07-31"),
    ("Cybersecurity Incident Response", "IT", "Reduce the time to contain security incidents", "< 2 hours", "4 hours", KpiStatus::Ongoing, 66, 120_000.0, Frequency::Weekly, "2025-01-01", "2025-07-31"),
    ("Digital Transformation Progress", "IT", "Digitise paper-based workflows", "80%", "45%", KpiStatus::AtRisk, 40, 500_000.0, Frequency::Monthly, "2025-01-01", "2025-12-31"),
    ("Employee Satisfaction Score", "HR", "Improve staff engagement", "85%", "78%", KpiStatus::Achieved, 100, 60_000.0, Frequency::Monthly, "2025-01-01", "2025-07-31"),
    ("Training Program Effectiveness", "HR", "Raise post-training assessment scores", "90%", "82%", KpiStatus::Ongoing, 77, 150_000.0, Frequency::Monthly, "2025-01-01", "2025-07-31"),
    ("Workplace Diversity Index", "HR", "Broaden representation across grades", "80", "65", KpiStatus::Missed, 52, 45_000.0, Frequency::Annually, "2024-01-01", "2024-12-31"),
    ("Brand Awareness Index", "Marketing", "Grow unaided brand recall in key markets", "70%", "55%", KpiStatus::Ongoing, 61, 220_000.0, Frequency::Quarterly, "2025-01-01", "2025-12-31"),
    // legacy row kept from a spreadsheet import, its start date never parsed
    ("Loyalty Card Sign-ups", "Marketing", "Enrol customers in the loyalty programme", "20,000", "12,500", KpiStatus::Ongoing, 45, 90_000.0, Frequency::Monthly, "Q1 2025", "2025-12-31"),
];

/// Seeded KPIs still waiting in the approval queue. Every other seeded KPI is
/// approved by the BDC reviewer.
const PENDING_APPROVAL: &[&str] = &[
    "Market Share Expansion",
    "Digital Transformation Progress",
    "Brand Awareness Index",
];

const SEED_REVIEWER: &str = "Kwame Asante";

// (name, type, start, end, status, participants, completion)
const CYCLES: &[(&str, CycleType, (i32, u32, u32), (i32, u32, u32), CycleStatus, u32, u8)] = &[
    ("Q1 2025 Performance Review", CycleType::Quarterly, (2025, 1, 1), (2025, 3, 31), CycleStatus::Completed, 45, 100),
    ("Q2 2025 Performance Review", CycleType::Quarterly, (2025, 4, 1), (2025, 6, 30), CycleStatus::Completed, 47, 100),
    ("Q3 2025 Performance Review", CycleType::Quarterly, (2025, 7, 1), (2025, 9, 30), CycleStatus::Active, 45, 65),
    ("Annual Review 2025", CycleType::Annual, (2025, 1, 1), (2025, 12, 31), CycleStatus::Active, 120, 30),
    ("New Hire Probation - September", CycleType::Probation, (2025, 9, 1), (2025, 11, 30), CycleStatus::Draft, 8, 0),
];

// (full name, email, department, role)
const USERS: &[(&str, &str, &str, Role)] = &[
    ("Mike Johnson", "mike.johnson@example.com", "IT", Role::Admin),
    ("Kamil Alhassan", "kamil.alhassan@example.com", "Operations", Role::Hod),
    ("Akua Frimpong", "akua.frimpong@example.com", "HR", Role::Hod),
    ("Esi Owusu", "esi.owusu@example.com", "Finance", Role::User),
    ("Kwame Asante", "kwame.asante@example.com", "Sales", Role::Bde),
    ("Ama Mensah", "ama.mensah@example.com", "Finance", Role::Auditor),
];

// (owner, title, description, due, priority, category, progress, status, key results, alignment)
type GoalRow = (
    &'static str,
    &'static str,
    &'static str,
    (i32, u32, u32),
    GoalPriority,
    &'static str,
    u8,
    GoalStatus,
    &'static [&'static str],
    &'static str,
);

const GOALS: &[GoalRow] = &[
    ("Esi Owusu", "Implement new reporting dashboard", "Replace the monthly spreadsheet pack with a live dashboard", (2025, 7, 30), GoalPriority::High, "Technical", 75, GoalStatus::InProgress, &["Agree report layout with Finance", "Automate the data feed"], "Q2 Goal"),
    ("Esi Owusu", "Complete leadership training program", "Finish all modules of the internal leadership track", (2025, 8, 15), GoalPriority::Medium, "Development", 40, GoalStatus::InProgress, &["Attend six workshops", "Lead one team retrospective"], "Q2 Goal"),
    ("Esi Owusu", "Close Q1 audit findings", "Resolve every open finding from the Q1 internal audit", (2025, 4, 30), GoalPriority::High, "Business", 100, GoalStatus::Completed, &[], "Q1 Goal"),
    ("Esi Owusu", "Mentor a new analyst", "Support the September hire through probation", (2025, 11, 30), GoalPriority::Low, "Leadership", 0, GoalStatus::NotStarted, &[], "Q4 Goal"),
];

// (kind, title, message, department, hours ago, read)
const NOTIFICATIONS: &[(NotificationKind, &str, &str, &str, i64, bool)] = &[
    (NotificationKind::Alert, "KPI Deadline Approaching", "Equipment Uptime Percentage review due in 3 days", "Operations", 2, false),
    (NotificationKind::Achievement, "KPI Target Achieved", "Monthly Revenue Growth exceeded target of 12%", "Sales", 5, false),
    (NotificationKind::Info, "KPI Updated", "Budget allocation updated for Digital Transformation Progress", "IT", 26, true),
];

// (user, role label, action, details, ip, (y, m, d, h, min))
const AUDIT: &[(&str, &str, AuditAction, &str, &str, (i32, u32, u32, u32, u32))] = &[
    ("Mike Johnson", "Administrator", AuditAction::Login, "Signed in", "192.168.1.4", (2025, 8, 14, 8, 2)),
    ("Mike Johnson", "Administrator", AuditAction::KpiCreated, "Created KPI 'Brand Awareness Index' for Marketing", "192.168.1.4", (2025, 8, 14, 8, 20)),
    ("Kamil Alhassan", "Department Head", AuditAction::Navigation, "Opened KPI Dashboard", "192.168.1.10", (2025, 8, 15, 19, 26)),
    ("Kamil Alhassan", "Department Head", AuditAction::KpiUpdated, "Updated KPI 'Equipment Uptime Percentage' (Ongoing, 72%)", "192.168.1.10", (2025, 8, 15, 19, 40)),
    ("Esi Owusu", "Employee", AuditAction::LoginFailed, "Invalid credentials", "192.168.1.23", (2025, 8, 16, 7, 55)),
    ("Ama Mensah", "Auditor", AuditAction::DataExport, "Exported 18 KPIs", "192.168.1.31", (2025, 8, 16, 10, 12)),
    ("Kamil Alhassan", "Department Head", AuditAction::Logout, "Signed out", "192.168.1.10", (2025, 8, 16, 17, 3)),
];

/// Fills empty tables with demo data. Tables that already hold rows are left
/// untouched, so restarting never duplicates anything.
pub async fn seed_demo_data(gateway: &dyn DataGateway) -> anyhow::Result<()> {
    if gateway.fetch_departments().await?.is_empty() {
        for (name, head, staff, total, utilized, description) in DEPARTMENTS {
            let department = Department {
                id: DepartmentId(0),
                name: name.to_string(),
                head: head.to_string(),
                staff_count: *staff,
                budget_total: *total,
                budget_utilized: *utilized,
                description: description.to_string(),
            };
            gateway.insert_department(&department).await?;
        }
        tracing::info!("Seeded {} departments", DEPARTMENTS.len());
    }

    if gateway.fetch_kpis().await?.is_empty() {
        let reviewed_at = Utc
            .with_ymd_and_hms(2025, 8, 14, 9, 0, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("Invalid seed review timestamp"))?;
        for row in KPIS {
            let (indicator, department, objective, target, baseline, status, progress, budget, frequency, start, end) = *row;
            let kpi = Kpi {
                id: KpiId(0),
                indicator: indicator.to_string(),
                department: department.to_string(),
                objective: objective.to_string(),
                target: target.to_string(),
                baseline: baseline.to_string(),
                status,
                progress,
                budget,
                frequency,
                activities: String::new(),
                verification: String::new(),
                comments: String::new(),
                timeline_start: start.to_string(),
                timeline_end: end.to_string(),
                approval: if PENDING_APPROVAL.contains(&indicator) {
                    Approval::default()
                } else {
                    Approval::approved(SEED_REVIEWER, reviewed_at)
                },
            };
            gateway.insert_kpi(&kpi).await?;
        }
        tracing::info!("Seeded {} KPIs", KPIS.len());
    }

    if gateway.fetch_cycles().await?.is_empty() {
        for (name, cycle_type, start, end, status, participants, progress) in CYCLES {
            let date = |(y, m, d): (i32, u32, u32)| {
                NaiveDate::from_ymd_opt(y, m, d)
                    .ok_or_else(|| anyhow::anyhow!("Invalid seed date {}-{}-{}", y, m, d))
            };
            let cycle = PerformanceCycle {
                id: CycleId(0),
                name: name.to_string(),
                cycle_type: *cycle_type,
                start_date: date(*start)?,
                end_date: date(*end)?,
                status: *status,
                participants: *participants,
                progress: *progress,
            };
            gateway.insert_cycle(&cycle).await?;
        }
        tracing::info!("Seeded {} performance cycles", CYCLES.len());
    }

    if gateway.fetch_users().await?.is_empty() {
        for (full_name, email, department, role) in USERS {
            let user = User {
                id: UserId(0),
                full_name: full_name.to_string(),
                email: email.to_string(),
                department: department.to_string(),
                role: *role,
                is_active: true,
            };
            gateway.insert_user(&user).await?;
        }
        tracing::info!("Seeded {} users", USERS.len());
    }

    if gateway.fetch_goals().await?.is_empty() {
        for row in GOALS {
            let (owner, title, description, (y, m, d), priority, category, progress, status, key_results, alignment) = *row;
            let goal = Goal {
                id: GoalId(0),
                owner: owner.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                due_date: NaiveDate::from_ymd_opt(y, m, d)
                    .ok_or_else(|| anyhow::anyhow!("Invalid seed date for goal '{}'", title))?,
                priority,
                category: category.to_string(),
                progress,
                status,
                key_results: key_results.iter().map(|r| r.to_string()).collect(),
                alignment: alignment.to_string(),
            };
            gateway.insert_goal(&goal).await?;
        }
        tracing::info!("Seeded {} goals", GOALS.len());
    }

    if gateway.fetch_notifications().await?.is_empty() {
        let now = Utc::now();
        for (kind, title, message, department, hours_ago, read) in NOTIFICATIONS {
            let mut notification = Notification::new(*kind, *title, *message, *department);
            notification.created_at = now - chrono::Duration::hours(*hours_ago);
            notification.read = *read;
            gateway.insert_notification(&notification).await?;
        }
        tracing::info!("Seeded {} notifications", NOTIFICATIONS.len());
    }

    if gateway.fetch_audit_entries().await?.is_empty() {
        for (user, role, action, details, ip, (y, m, d, h, min)) in AUDIT {
            let mut entry = AuditEntry::new(*user, *role, *action, *details).with_ip(*ip);
            entry.timestamp = Utc
                .with_ymd_and_hms(*y, *m, *d, *h, *min, 0)
                .single()
                .ok_or_else(|| anyhow::anyhow!("Invalid seed timestamp for '{}'", details))?;
            gateway.insert_audit_entry(&entry).await?;
        }
        tracing::info!("Seeded {} audit entries", AUDIT.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryGateway;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let gateway = InMemoryGateway::new();
        seed_demo_data(&gateway).await.unwrap();
        seed_demo_data(&gateway).await.unwrap();
        assert_eq!(gateway.fetch_kpis().await.unwrap().len(), KPIS.len());
        assert_eq!(gateway.fetch_departments().await.unwrap().len(), DEPARTMENTS.len());
        assert_eq!(gateway.fetch_cycles().await.unwrap().len(), CYCLES.len());
        assert_eq!(gateway.fetch_users().await.unwrap().len(), USERS.len());
        assert_eq!(gateway.fetch_audit_entries().await.unwrap().len(), AUDIT.len());
        assert_eq!(gateway.fetch_goals().await.unwrap().len(), GOALS.len());
        assert_eq!(gateway.fetch_notifications().await.unwrap().len(), NOTIFICATIONS.len());
    }

    #[tokio::test]
    async fn test_seed_leaves_some_kpis_pending() {
        let gateway = InMemoryGateway::new();
        seed_demo_data(&gateway).await.unwrap();
        let kpis = gateway.fetch_kpis().await.unwrap();
        let pending: Vec<&str> = kpis
            .iter()
            .filter(|k| k.approval.is_pending())
            .map(|k| k.indicator.as_str())
            .collect();
        assert_eq!(pending, PENDING_APPROVAL);
        assert!(kpis
            .iter()
            .filter(|k| !k.approval.is_pending())
            .all(|k| k.approval.decided_by == SEED_REVIEWER));
    }

    #[test]
    fn test_seed_goals_are_valid() {
        for row in GOALS {
            let goal = Goal {
                id: GoalId(0),
                owner: row.0.into(),
                title: row.1.into(),
                description: row.2.into(),
                due_date: NaiveDate::from_ymd_opt(row.3 .0, row.3 .1, row.3 .2).unwrap(),
                priority: row.4,
                category: row.5.into(),
                progress: row.6,
                status: row.7,
                key_results: Vec::new(),
                alignment: row.9.into(),
            };
            assert!(goal.validate().is_ok(), "{}", goal.title);
        }
    }

    #[test]
    fn test_seed_rows_are_valid_except_legacy_date() {
        for row in KPIS {
            let kpi = Kpi {
                id: KpiId(0),
                indicator: row.0.into(),
                department: row.1.into(),
                objective: row.2.into(),
                target: row.3.into(),
                baseline: row.4.into(),
                status: row.5,
                progress: row.6,
                budget: row.7,
                frequency: row.8,
                activities: String::new(),
                verification: String::new(),
                comments: String::new(),
                timeline_start: row.9.into(),
                timeline_end: row.10.into(),
                approval: Approval::default(),
            };
            if kpi.start_date().is_some() {
                assert!(kpi.validate().is_ok(), "{}", kpi.indicator);
            }
        }
    }
}
