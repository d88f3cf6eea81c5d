use super::aggregate::{Kpi, KpiStatus};
use crate::domain::common::criterion;
use serde::{Deserialize, Serialize};

/// Criteria for narrowing a KPI list.
///
/// Every field is optional and all present criteria must hold. Values such as
/// "All Departments" count as absent, so select boxes can be bound directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl KpiFilter {
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Number of criteria that actually restrict the result.
    pub fn active_count(&self) -> usize {
        [&self.department, &self.status, &self.year, &self.search]
            .into_iter()
            .filter(|c| criterion(c).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, kpi: &Kpi) -> bool {
        if let Some(department) = criterion(&self.department) {
            if kpi.department != department {
                return false;
            }
        }

        if let Some(status) = criterion(&self.status) {
            // An unknown label restricts to nothing rather than to everything.
            match KpiStatus::from_label(status) {
                Some(wanted) if wanted == kpi.status => {}
                _ => return false,
            }
        }

        if let Some(year) = criterion(&self.year) {
            let wanted = match year.parse::<i32>() {
                Ok(y) => y,
                Err(_) => return false,
            };
            if kpi.start_year() != Some(wanted) {
                return false;
            }
        }

        if let Some(search) = criterion(&self.search) {
            let needle = search.to_lowercase();
            if !kpi.objective.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    /// Returns the matching records in their original order.
    pub fn apply(&self, kpis: &[Kpi]) -> Vec<Kpi> {
        kpis.iter().filter(|k| self.matches(k)).cloned().collect()
    }
}

/// Distinct start years present in the list, newest first.
pub fn available_years(kpis: &[Kpi]) -> Vec<i32> {
    let mut years: Vec<i32> = kpis.iter().filter_map(Kpi::start_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Distinct departments present in the list, in first-seen order.
pub fn present_departments(kpis: &[Kpi]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for kpi in kpis {
        if !seen.contains(&kpi.department) {
            seen.push(kpi.department.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::aggregate::{Frequency, KpiId};

    fn kpi(id: i64, department: &str, status: KpiStatus, start: &str, objective: &str) -> Kpi {
        Kpi {
            id: KpiId(id),
            indicator: format!("Indicator {}", id),
            department: department.into(),
            objective: objective.into(),
            target: "100%".into(),
            baseline: String::new(),
            status,
            progress: 50,
            budget: 1000.0,
            frequency: Frequency::Monthly,
            activities: String::new(),
            verification: String::new(),
            comments: String::new(),
            timeline_start: start.into(),
            timeline_end: "2025-12-31".into(),
            approval: Default::default(),
        }
    }

    fn two_records() -> Vec<Kpi> {
        vec![
            kpi(1, "IT", KpiStatus::Achieved, "2025-01-01", "Improve network uptime"),
            kpi(2, "HR", KpiStatus::Ongoing, "2024-06-01", "Reduce staff turnover"),
        ]
    }

    fn sample() -> Vec<Kpi> {
        vec![
            kpi(1, "IT", KpiStatus::Achieved, "2025-01-01", "Improve network uptime"),
            kpi(2, "HR", KpiStatus::Ongoing, "2024-06-01", "Reduce staff turnover"),
            kpi(3, "IT", KpiStatus::AtRisk, "2025-03-15", "Migrate ERP to the cloud"),
            kpi(4, "Finance", KpiStatus::Missed, "not-a-date", "Close books on time"),
            kpi(5, "IT", KpiStatus::Ongoing, "2024-02-01", "Harden NETWORK security"),
        ]
    }

    #[test]
    fn test_department_all_and_year() {
        let filter = KpiFilter::default().with_department("All").with_year("2025");
        let result = filter.apply(&two_records());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].department, "IT");
    }

    #[test]
    fn test_unmatched_status_yields_empty() {
        let filter = KpiFilter::default().with_status("At Risk");
        assert!(filter.apply(&two_records()).is_empty());
    }

    #[test]
    fn test_all_wildcards_return_input_unchanged() {
        let filter = KpiFilter {
            department: Some("All Departments".into()),
            status: Some("All Status".into()),
            year: Some("All Years".into()),
            search: Some(String::new()),
        };
        let data = sample();
        assert_eq!(filter.apply(&data), data);
        assert!(filter.is_empty());
        assert!(KpiFilter::default().apply(&[]).is_empty());
    }

    #[test]
    fn test_result_is_subset_in_original_order() {
        let data = sample();
        let result = KpiFilter::default().with_department("IT").apply(&data);
        let ids: Vec<i64> = result.iter().map(|k| k.id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert!(result.iter().all(|k| data.contains(k)));
    }

    #[test]
    fn test_conjunction_equals_chained_filters() {
        let data = sample();
        let chained = KpiFilter::default()
            .with_status("Ongoing")
            .apply(&KpiFilter::default().with_department("IT").apply(&data));
        let combined = KpiFilter::default()
            .with_department("IT")
            .with_status("Ongoing")
            .apply(&data);
        assert_eq!(chained, combined);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id, KpiId(5));
    }

    #[test]
    fn test_idempotent() {
        let data = sample();
        let filter = KpiFilter::default().with_department("IT").with_search("network");
        let once = filter.apply(&data);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_dates_are_excluded_from_year_filter() {
        let data = sample();
        let result = KpiFilter::default().with_department("Finance").with_year("2025").apply(&data);
        assert!(result.is_empty());
        // without a year the record is still visible
        let result = KpiFilter::default().with_department("Finance").apply(&data);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_trailing_garbage_date_is_malformed() {
        let data = vec![
            kpi(1, "IT", KpiStatus::Ongoing, "2025-01-01-garbage", "Patch servers"),
            kpi(2, "IT", KpiStatus::Ongoing, "2025-01-01", "Patch laptops"),
        ];
        let result = KpiFilter::default().with_year("2025").apply(&data);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, KpiId(2));
        assert_eq!(available_years(&data), vec![2025]);
    }

    #[test]
    fn test_non_numeric_year_matches_nothing() {
        assert!(KpiFilter::default().with_year("twenty").apply(&sample()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_objective() {
        let result = KpiFilter::default().with_search("Network").apply(&sample());
        let ids: Vec<i64> = result.iter().map(|k| k.id.0).collect();
        assert_eq!(ids, vec![1, 5]);
        // indicator text is not searched
        assert!(KpiFilter::default().with_search("Indicator").apply(&sample()).is_empty());
    }

    #[test]
    fn test_unknown_status_label_matches_nothing() {
        assert!(KpiFilter::default().with_status("Delayed").apply(&sample()).is_empty());
    }

    #[test]
    fn test_active_count() {
        let filter = KpiFilter::default()
            .with_department("All Departments")
            .with_status("Achieved")
            .with_search("cloud");
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_available_years_and_departments() {
        let data = sample();
        assert_eq!(available_years(&data), vec![2025, 2024]);
        assert_eq!(present_departments(&data), vec!["IT", "HR", "Finance"]);
    }
}
