use crate::dashboards::{d400_kpi_summary, d403_cycle_summary};
use crate::domain::a001_kpi::Kpi;
use crate::domain::a002_performance_cycle::PerformanceCycle;
use crate::domain::a004_audit_entry::AuditSummary;
use crate::shared::indicators::{ChangeKind, IconColour, StatsChange, StatsDatum};
use crate::system::navigation::Role;
use serde::{Deserialize, Serialize};

/// Kinds of cards a role dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardCard {
    TotalKpis,
    AchievedKpis,
    OngoingKpis,
    AtRiskKpis,
    MissedKpis,
    AverageProgress,
    TotalBudget,
    ActiveCycles,
    PendingApprovals,
    AuditActivities,
    FailedLogins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    pub role: Role,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: &'static [DashboardCard],
}

pub fn config_for(role: Role) -> DashboardConfig {
    use DashboardCard::*;
    match role {
        Role::Admin => DashboardConfig {
            role,
            title: "Admin Dashboard",
            subtitle: "Organisation-wide KPI and review overview",
            cards: &[TotalKpis, AchievedKpis, AtRiskKpis, ActiveCycles],
        },
        Role::Hod => DashboardConfig {
            role,
            title: "Manager Dashboard",
            subtitle: "Department KPIs and team review progress",
            cards: &[TotalKpis, OngoingKpis, AtRiskKpis, AverageProgress],
        },
        Role::User => DashboardConfig {
            role,
            title: "Employee Dashboard",
            subtitle: "Your goals and current review cycle",
            cards: &[OngoingKpis, AchievedKpis, AverageProgress, ActiveCycles],
        },
        Role::Bde => DashboardConfig {
            role,
            title: "BDC Dashboard",
            subtitle: "KPIs awaiting review and budget in play",
            cards: &[PendingApprovals, AchievedKpis, TotalBudget, AverageProgress],
        },
        Role::Auditor => DashboardConfig {
            role,
            title: "Auditor Dashboard",
            subtitle: "Activity trail and compliance signals",
            cards: &[AuditActivities, FailedLogins, TotalKpis, MissedKpis],
        },
    }
}

/// Collections the cards are computed from.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInputs<'a> {
    pub kpis: &'a [Kpi],
    pub cycles: &'a [PerformanceCycle],
    pub audit: AuditSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDashboard {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<StatsDatum>,
}

pub fn build_cards(config: &DashboardConfig, inputs: &DashboardInputs<'_>) -> Vec<StatsDatum> {
    let kpis = d400_kpi_summary::summarize(inputs.kpis, &[]);
    let cycles = d403_cycle_summary::summarize(inputs.cycles);
    let counts = kpis.counts;
    let pending_approvals = inputs.kpis.iter().filter(|k| k.approval.is_pending()).count();

    config
        .cards
        .iter()
        .map(|card| match card {
            DashboardCard::TotalKpis => StatsDatum::integer(
                "Total KPIs",
                "BulletedList2",
                counts.total,
                IconColour::Orange,
                StatsChange::new(
                    format!("{} departments", kpis.department_count),
                    ChangeKind::Neutral,
                    "BulletedList2",
                ),
            ),
            DashboardCard::AchievedKpis => StatsDatum::integer(
                "Achieved",
                "Trophy2Solid",
                counts.achieved,
                IconColour::Success,
                StatsChange::new("Targets met", ChangeKind::Positive, "ArrowUp"),
            ),
            DashboardCard::OngoingKpis => StatsDatum::integer(
                "Ongoing",
                "ProgressRingDots",
                counts.ongoing,
                IconColour::Info,
                StatsChange::new("Awaiting completion", ChangeKind::Neutral, "Clock"),
            ),
            DashboardCard::AtRiskKpis => StatsDatum::integer(
                "At Risk",
                "IncidentTriangle",
                counts.at_risk,
                IconColour::Danger,
                StatsChange::new("Need attention", ChangeKind::Negative, "ArrowDown"),
            ),
            DashboardCard::MissedKpis => StatsDatum::integer(
                "Missed",
                "ErrorBadge",
                counts.missed,
                IconColour::Danger,
                StatsChange::new("Closed below target", ChangeKind::Negative, "ArrowDown"),
            ),
            DashboardCard::AverageProgress => StatsDatum::percent(
                "Avg. Progress",
                "ProgressRingDots",
                kpis.average_progress as f64,
                IconColour::Warning,
                StatsChange::new("Across listed KPIs", ChangeKind::Neutral, "Clock"),
            ),
            DashboardCard::TotalBudget => StatsDatum::money(
                "Total Budget",
                "Money",
                kpis.total_budget,
                IconColour::Orange,
                StatsChange::new("Allocated to KPIs", ChangeKind::Neutral, "Money"),
            ),
            DashboardCard::ActiveCycles => StatsDatum::integer(
                "Active Cycles",
                "Calendar",
                cycles.active_cycles,
                IconColour::Info,
                StatsChange::new(
                    format!("{} participants", cycles.active_participants),
                    ChangeKind::Neutral,
                    "Group",
                ),
            ),
            DashboardCard::PendingApprovals => StatsDatum::integer(
                "Pending Approvals",
                "CompletedSolid",
                pending_approvals,
                IconColour::Warning,
                StatsChange::new("KPIs awaiting a decision", ChangeKind::Neutral, "Clock"),
            ),
            DashboardCard::AuditActivities => StatsDatum::integer(
                "Total Activities",
                "ComplianceAudit",
                inputs.audit.total_activities,
                IconColour::Info,
                StatsChange::new(
                    format!("{} today", inputs.audit.todays_activities),
                    ChangeKind::Neutral,
                    "Clock",
                ),
            ),
            DashboardCard::FailedLogins => StatsDatum::integer(
                "Failed Logins",
                "Blocked",
                inputs.audit.failed_logins,
                IconColour::Danger,
                StatsChange::new(
                    format!("{} active users", inputs.audit.active_users),
                    ChangeKind::Negative,
                    "ArrowDown",
                ),
            ),
        })
        .collect()
}

pub fn build(role: Role, inputs: &DashboardInputs<'_>) -> RoleDashboard {
    let config = config_for(role);
    RoleDashboard {
        title: config.title.to_string(),
        subtitle: config.subtitle.to_string(),
        cards: build_cards(&config, inputs),
    }
}
