use crate::dashboards::d400_kpi_summary::{self as summary, KpiStatusCounts};
use crate::domain::a001_kpi::{Kpi, KpiFilter, KpiStatus};
use crate::domain::a003_department::Department;
use crate::domain::common::criterion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query of the report screen: only department and year are offered there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl ReportRequest {
    pub fn to_filter(&self) -> KpiFilter {
        KpiFilter {
            department: self.department.clone(),
            year: self.year.clone(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> String {
        let department = criterion(&self.department).unwrap_or("All Departments");
        let year = criterion(&self.year).unwrap_or("All Years");
        format!("KPI Progress Report for {} ({})", department, year)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub department: String,
    pub kpi_count: usize,
    pub achieved: usize,
    pub average_progress: u32,
    pub budget_allocated: f64,
    pub budget_utilized: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub counts: KpiStatusCounts,
    pub average_progress: u32,
    pub rows: Vec<ReportRow>,
}

pub fn build_report(
    request: &ReportRequest,
    kpis: &[Kpi],
    departments: &[Department],
    generated_at: DateTime<Utc>,
) -> KpiReport {
    let selected = request.to_filter().apply(kpis);
    let rows = summary::department_progress(&selected)
        .into_iter()
        .map(|p| {
            let achieved = selected
                .iter()
                .filter(|k| k.department == p.department && k.status == KpiStatus::Achieved)
                .count();
            let allocated: f64 = selected
                .iter()
                .filter(|k| k.department == p.department)
                .map(|k| k.budget)
                .sum();
            let utilized = departments
                .iter()
                .find(|d| d.name == p.department)
                .map(|d| d.budget_utilized)
                .unwrap_or(0.0);
            ReportRow {
                department: p.department,
                kpi_count: p.kpi_count,
                achieved,
                average_progress: p.average_progress,
                budget_allocated: allocated,
                budget_utilized: utilized,
            }
        })
        .collect();

    KpiReport {
        title: request.title(),
        generated_at,
        counts: summary::count_by_status(&selected),
        average_progress: summary::average_progress(&selected),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::{Frequency, KpiId};
    use chrono::TimeZone;

    fn kpi(department: &str, status: KpiStatus, start: &str, progress: u8) -> Kpi {
        Kpi {
            id: KpiId(0),
            indicator: "Indicator".into(),
            department: department.into(),
            objective: "Objective".into(),
            target: "100%".into(),
            baseline: String::new(),
            status,
            progress,
            budget: 100.0,
            frequency: Frequency::Monthly,
            activities: String::new(),
            verification: String::new(),
            comments: String::new(),
            timeline_start: start.into(),
            timeline_end: "2025-12-31".into(),
            approval: Default::default(),
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            ReportRequest::default().title(),
            "KPI Progress Report for All Departments (All Years)"
        );
        let request = ReportRequest {
            department: Some("IT".into()),
            year: Some("2025".into()),
        };
        assert_eq!(request.title(), "KPI Progress Report for IT (2025)");
    }

    #[test]
    fn test_report_rows() {
        let kpis = vec![
            kpi("IT", KpiStatus::Achieved, "2025-01-01", 100),
            kpi("IT", KpiStatus::Ongoing, "2025-02-01", 50),
            kpi("HR", KpiStatus::Achieved, "2024-01-01", 100),
        ];
        let at = Utc.with_ymd_and_hms(2025, 8, 16, 10, 0, 0).unwrap();
        let request = ReportRequest {
            department: None,
            year: Some("2025".into()),
        };
        let report = build_report(&request, &kpis, &[], at);
        assert_eq!(report.generated_at, at);
        assert_eq!(report.counts.total, 2);
        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.department, "IT");
        assert_eq!(row.kpi_count, 2);
        assert_eq!(row.achieved, 1);
        assert_eq!(row.average_progress, 75);
        assert_eq!(row.budget_allocated, 200.0);
        assert_eq!(row.budget_utilized, 0.0);
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(&ReportRequest::default(), &[], &[], Utc::now());
        assert!(report.rows.is_empty());
        assert_eq!(report.average_progress, 0);
    }
}
