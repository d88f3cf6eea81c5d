use serde::{Deserialize, Serialize};

crate::integer_id!(
    /// Unique department identifier
    DepartmentId
);

/// Organisational department with its budget envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default)]
    pub id: DepartmentId,
    pub name: String,
    pub head: String,
    pub staff_count: u32,
    pub budget_total: f64,
    pub budget_utilized: f64,
    #[serde(default)]
    pub description: String,
}

impl Department {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Department name must not be empty".into());
        }
        if self.budget_total < 0.0 || self.budget_utilized < 0.0 {
            return Err("Budgets must not be negative".into());
        }
        Ok(())
    }
}

/// Figures shown on the department management cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub departments: usize,
    pub total_staff: u32,
    pub total_budget: f64,
    pub average_staff: u32,
}

pub fn summarize(departments: &[Department]) -> DepartmentSummary {
    let count = departments.len();
    let total_staff: u32 = departments.iter().map(|d| d.staff_count).sum();
    let total_budget: f64 = departments.iter().map(|d| d.budget_total).sum();
    let average_staff = if count == 0 {
        0
    } else {
        (total_staff as f64 / count as f64).round() as u32
    };
    DepartmentSummary {
        departments: count,
        total_staff,
        total_budget,
        average_staff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(name: &str, staff: u32, total: f64) -> Department {
        Department {
            id: DepartmentId(0),
            name: name.into(),
            head: "Head".into(),
            staff_count: staff,
            budget_total: total,
            budget_utilized: 0.0,
            description: String::new(),
        }
    }

    #[test]
    fn test_summary() {
        let list = vec![dept("Finance", 7, 2_500_000.0), dept("IT", 8, 3_500_000.0)];
        let summary = summarize(&list);
        assert_eq!(summary.departments, 2);
        assert_eq!(summary.total_staff, 15);
        assert_eq!(summary.total_budget, 6_000_000.0);
        assert_eq!(summary.average_staff, 8);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        assert_eq!(summarize(&[]), DepartmentSummary::default());
    }
}
