use crate::domain::a001_kpi::{Kpi, KpiStatus};
use crate::domain::a003_department::Department;
use crate::shared::indicators::{
    ChangeKind, IconColour, StatsChange, StatsDatum, BUDGET_UTILIZATION, PROGRESS_HEALTH,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Status counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiStatusCounts {
    pub total: usize,
    pub achieved: usize,
    pub ongoing: usize,
    pub at_risk: usize,
    pub missed: usize,
}

impl KpiStatusCounts {
    pub fn get(&self, status: KpiStatus) -> usize {
        match status {
            KpiStatus::Ongoing => self.ongoing,
            KpiStatus::Achieved => self.achieved,
            KpiStatus::AtRisk => self.at_risk,
            KpiStatus::Missed => self.missed,
        }
    }

    /// Share of `status` in the total, rounded. 0 when there are no KPIs.
    pub fn share(&self, status: KpiStatus) -> u32 {
        percent_of(self.get(status) as f64, self.total as f64)
    }
}

pub fn count_by_status(kpis: &[Kpi]) -> KpiStatusCounts {
    let mut counts = KpiStatusCounts {
        total: kpis.len(),
        ..Default::default()
    };
    for kpi in kpis {
        match kpi.status {
            KpiStatus::Achieved => counts.achieved += 1,
            KpiStatus::Ongoing => counts.ongoing += 1,
            KpiStatus::AtRisk => counts.at_risk += 1,
            KpiStatus::Missed => counts.missed += 1,
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Progress and budget
// ---------------------------------------------------------------------------

fn percent_of(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0;
    }
    (part / whole * 100.0).round().max(0.0) as u32
}

/// Rounded mean progress, 0 for an empty list.
pub fn average_progress(kpis: &[Kpi]) -> u32 {
    if kpis.is_empty() {
        return 0;
    }
    let sum: u32 = kpis.iter().map(|k| k.progress as u32).sum();
    (sum as f64 / kpis.len() as f64).round() as u32
}

/// `round(utilized / total * 100)`, 0 when nothing was allocated.
pub fn budget_utilization(total: f64, utilized: f64) -> u32 {
    percent_of(utilized, total)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentProgress {
    pub department: String,
    pub kpi_count: usize,
    pub average_progress: u32,
    pub colour: String,
}

/// Average progress per department present in the list, sorted by name.
pub fn department_progress(kpis: &[Kpi]) -> Vec<DepartmentProgress> {
    let mut groups: BTreeMap<&str, Vec<&Kpi>> = BTreeMap::new();
    for kpi in kpis {
        groups.entry(kpi.department.as_str()).or_default().push(kpi);
    }
    groups
        .into_iter()
        .map(|(department, members)| {
            let sum: u32 = members.iter().map(|k| k.progress as u32).sum();
            let average = (sum as f64 / members.len() as f64).round() as u32;
            DepartmentProgress {
                department: department.to_string(),
                kpi_count: members.len(),
                average_progress: average,
                colour: PROGRESS_HEALTH.colour(average as f64).to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentBudget {
    pub department: String,
    pub budget_total: f64,
    pub budget_utilized: f64,
    pub utilization: u32,
    pub colour: String,
}

/// Budget utilization for every department that owns at least one of the
/// KPIs. Departments without a record count as nothing allocated.
pub fn department_budgets(kpis: &[Kpi], departments: &[Department]) -> Vec<DepartmentBudget> {
    department_progress(kpis)
        .into_iter()
        .map(|p| {
            let (total, utilized) = departments
                .iter()
                .find(|d| d.name == p.department)
                .map(|d| (d.budget_total, d.budget_utilized))
                .unwrap_or((0.0, 0.0));
            let utilization = budget_utilization(total, utilized);
            DepartmentBudget {
                department: p.department,
                budget_total: total,
                budget_utilized: utilized,
                utilization,
                colour: BUDGET_UTILIZATION.colour(utilization as f64).to_string(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub counts: KpiStatusCounts,
    pub average_progress: u32,
    pub department_count: usize,
    pub total_budget: f64,
    pub departments: Vec<DepartmentProgress>,
    pub budgets: Vec<DepartmentBudget>,
}

pub fn summarize(kpis: &[Kpi], departments: &[Department]) -> KpiSummary {
    let progress = department_progress(kpis);
    KpiSummary {
        counts: count_by_status(kpis),
        average_progress: average_progress(kpis),
        department_count: progress.len(),
        total_budget: kpis.iter().map(|k| k.budget).filter(|b| b.is_finite()).sum(),
        budgets: department_budgets(kpis, departments),
        departments: progress,
    }
}

/// Payload of the KPI dashboard endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDashboardResponse {
    pub summary: KpiSummary,
    pub cards: Vec<StatsDatum>,
    /// Start years present in the unfiltered data, for the year select.
    pub years: Vec<i32>,
}

/// The four cards above the KPI list.
pub fn stats_cards(summary: &KpiSummary) -> Vec<StatsDatum> {
    let counts = &summary.counts;
    vec![
        StatsDatum::integer(
            "Total KPIs",
            "BulletedList2",
            counts.total,
            IconColour::Orange,
            StatsChange::new(
                format!("{} departments", summary.department_count),
                ChangeKind::Neutral,
                "BulletedList2",
            ),
        ),
        StatsDatum::integer(
            "Achieved",
            "Trophy2Solid",
            counts.achieved,
            IconColour::Success,
            StatsChange::new(
                format!("{}% of all KPIs", counts.share(KpiStatus::Achieved)),
                ChangeKind::Positive,
                "ArrowUp",
            ),
        ),
        StatsDatum::integer(
            "Ongoing",
            "ProgressRingDots",
            counts.ongoing,
            IconColour::Info,
            StatsChange::new("Awaiting completion", ChangeKind::Neutral, "Clock"),
        ),
        StatsDatum::integer(
            "At Risk",
            "IncidentTriangle",
            counts.at_risk,
            IconColour::Danger,
            StatsChange::new(
                format!("{}% need attention", counts.share(KpiStatus::AtRisk)),
                ChangeKind::Negative,
                "ArrowDown",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::{Frequency, KpiId};
    use crate::domain::a003_department::DepartmentId;

    fn kpi(department: &str, status: KpiStatus, progress: u8, budget: f64) -> Kpi {
        Kpi {
            id: KpiId(0),
            indicator: "Indicator".into(),
            department: department.into(),
            objective: "Objective".into(),
            target: "100%".into(),
            baseline: String::new(),
            status,
            progress,
            budget,
            frequency: Frequency::Monthly,
            activities: String::new(),
            verification: String::new(),
            comments: String::new(),
            timeline_start: "2025-01-01".into(),
            timeline_end: "2025-12-31".into(),
            approval: Default::default(),
        }
    }

    fn dept(name: &str, total: f64, utilized: f64) -> Department {
        Department {
            id: DepartmentId(0),
            name: name.into(),
            head: String::new(),
            staff_count: 1,
            budget_total: total,
            budget_utilized: utilized,
            description: String::new(),
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.counts, KpiStatusCounts::default());
        assert_eq!(summary.average_progress, 0);
        assert_eq!(summary.department_count, 0);
        assert_eq!(summary.total_budget, 0.0);
        assert!(summary.departments.is_empty());
        let cards = stats_cards(&summary);
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.value == 0.0));
        assert!(cards.iter().all(|c| !c.change.description.contains("NaN")));
    }

    #[test]
    fn test_count_by_status() {
        let kpis = vec![
            kpi("IT", KpiStatus::Achieved, 100, 0.0),
            kpi("IT", KpiStatus::AtRisk, 20, 0.0),
            kpi("HR", KpiStatus::Ongoing, 50, 0.0),
            kpi("HR", KpiStatus::Achieved, 90, 0.0),
        ];
        let counts = count_by_status(&kpis);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.achieved, 2);
        assert_eq!(counts.ongoing, 1);
        assert_eq!(counts.at_risk, 1);
        assert_eq!(counts.missed, 0);
        assert_eq!(counts.share(KpiStatus::Achieved), 50);
    }

    #[test]
    fn test_average_progress_rounds() {
        let kpis = vec![
            kpi("IT", KpiStatus::Ongoing, 10, 0.0),
            kpi("IT", KpiStatus::Ongoing, 11, 0.0),
        ];
        assert_eq!(average_progress(&kpis), 11);
    }

    #[test]
    fn test_budget_utilization() {
        assert_eq!(budget_utilization(100.0, 88.0), 88);
        assert_eq!(budget_utilization(0.0, 50.0), 0);
        assert_eq!(budget_utilization(-5.0, 50.0), 0);
        assert_eq!(budget_utilization(3_500_000.0, 2_500_000.0), 71);
    }

    #[test]
    fn test_department_progress_sorted_with_bands() {
        let kpis = vec![
            kpi("Sales", KpiStatus::Ongoing, 60, 0.0),
            kpi("Finance", KpiStatus::Achieved, 95, 0.0),
            kpi("Finance", KpiStatus::Achieved, 85, 0.0),
        ];
        let rows = department_progress(&kpis);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].department, "Finance");
        assert_eq!(rows[0].average_progress, 90);
        assert_eq!(rows[0].colour, "#10b981");
        assert_eq!(rows[1].colour, "#ef4444");
    }

    #[test]
    fn test_department_budgets_missing_department_is_zero() {
        let kpis = vec![
            kpi("Operations", KpiStatus::Ongoing, 50, 0.0),
            kpi("IT", KpiStatus::Ongoing, 50, 0.0),
        ];
        let departments = vec![dept("Operations", 8_000_000.0, 7_200_000.0)];
        let rows = department_budgets(&kpis, &departments);
        let it = rows.iter().find(|r| r.department == "IT").unwrap();
        assert_eq!(it.utilization, 0);
        assert_eq!(it.colour, "#f59e0b");
        let ops = rows.iter().find(|r| r.department == "Operations").unwrap();
        assert_eq!(ops.utilization, 90);
        assert_eq!(ops.colour, "#10b981");
    }

    #[test]
    fn test_summary_totals() {
        let kpis = vec![
            kpi("IT", KpiStatus::Achieved, 100, 1000.0),
            kpi("HR", KpiStatus::Ongoing, 0, 500.0),
        ];
        let summary = summarize(&kpis, &[]);
        assert_eq!(summary.department_count, 2);
        assert_eq!(summary.total_budget, 1500.0);
        assert_eq!(summary.average_progress, 50);
        let cards = stats_cards(&summary);
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Total KPIs", "Achieved", "Ongoing", "At Risk"]);
        assert_eq!(cards[1].value, 1.0);
    }
}
