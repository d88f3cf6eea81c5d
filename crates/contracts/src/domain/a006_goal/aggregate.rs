use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id!(
    /// Unique goal identifier
    GoalId
);

// ============================================================================
// Reference values
// ============================================================================

pub const CATEGORIES: [&str; 5] = ["Technical", "Development", "Leadership", "Business", "Personal"];

/// Planning horizon a goal is aligned to.
pub const ALIGNMENTS: [&str; 5] = ["Q1 Goal", "Q2 Goal", "Q3 Goal", "Q4 Goal", "Annual Objective"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum GoalPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl GoalPriority {
    pub const ALL: [GoalPriority; 3] = [GoalPriority::High, GoalPriority::Medium, GoalPriority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            GoalPriority::High => "High",
            GoalPriority::Medium => "Medium",
            GoalPriority::Low => "Low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum GoalStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "At Risk")]
    AtRisk,
    Completed,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::NotStarted,
        GoalStatus::InProgress,
        GoalStatus::AtRisk,
        GoalStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "Not Started",
            GoalStatus::InProgress => "In Progress",
            GoalStatus::AtRisk => "At Risk",
            GoalStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Personal goal with its key results, owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub owner: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: GoalPriority,
    pub category: String,
    /// Percentage, 0..=100
    pub progress: u8,
    pub status: GoalStatus,
    #[serde(default)]
    pub key_results: Vec<String>,
    pub alignment: String,
}

impl Goal {
    pub fn new_for_insert(dto: GoalDto, owner: &str) -> Self {
        let mut goal = Self {
            id: GoalId(0),
            owner: owner.trim().to_string(),
            title: String::new(),
            description: String::new(),
            due_date: dto.due_date,
            priority: GoalPriority::default(),
            category: String::new(),
            progress: 0,
            status: GoalStatus::default(),
            key_results: Vec::new(),
            alignment: String::new(),
        };
        goal.update(&dto);
        goal
    }

    /// Copies editable fields. A completed goal always reads 100%.
    pub fn update(&mut self, dto: &GoalDto) {
        self.title = dto.title.trim().to_string();
        self.description = dto.description.trim().to_string();
        self.due_date = dto.due_date;
        self.priority = dto.priority;
        self.category = dto.category.trim().to_string();
        self.alignment = dto.alignment.trim().to_string();
        self.progress = dto.progress.unwrap_or(self.progress);
        self.status = dto.status.unwrap_or(self.status);
        self.key_results = dto
            .key_results
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        if self.status == GoalStatus::Completed {
            self.progress = 100;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("Goal title must not be empty".into());
        }
        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err(format!("Unknown category '{}'", self.category));
        }
        if !ALIGNMENTS.contains(&self.alignment.as_str()) {
            return Err(format!("Unknown alignment '{}'", self.alignment));
        }
        if self.progress > 100 {
            return Err(format!(
                "Progress must be between 0 and 100, got {}",
                self.progress
            ));
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status != GoalStatus::Completed
    }

    /// Whole days until the due date; negative once overdue.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for goal create / update. `id == None` creates a new goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    #[serde(default)]
    pub id: Option<GoalId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: GoalPriority,
    pub category: String,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
    #[serde(default)]
    pub key_results: Vec<String>,
    pub alignment: String,
}

impl From<&Goal> for GoalDto {
    fn from(g: &Goal) -> Self {
        Self {
            id: Some(g.id),
            title: g.title.clone(),
            description: g.description.clone(),
            due_date: g.due_date,
            priority: g.priority,
            category: g.category.clone(),
            progress: Some(g.progress),
            status: Some(g.status),
            key_results: g.key_results.clone(),
            alignment: g.alignment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> GoalDto {
        GoalDto {
            id: None,
            title: " Complete Advanced React Certification ".into(),
            description: "Finish the advanced track".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            priority: GoalPriority::High,
            category: "Technical".into(),
            progress: Some(75),
            status: Some(GoalStatus::InProgress),
            key_results: vec!["Finish modules".into(), "  ".into(), " Pass exam ".into()],
            alignment: "Q3 Goal".into(),
        }
    }

    #[test]
    fn test_new_goal_is_normalised() {
        let goal = Goal::new_for_insert(dto(), " Kofi Boateng ");
        assert_eq!(goal.owner, "Kofi Boateng");
        assert_eq!(goal.title, "Complete Advanced React Certification");
        assert_eq!(goal.key_results, vec!["Finish modules", "Pass exam"]);
        assert!(goal.validate().is_ok());
        assert!(goal.is_active());
    }

    #[test]
    fn test_completed_goal_reads_full_progress() {
        let mut goal = Goal::new_for_insert(dto(), "Kofi Boateng");
        goal.update(&GoalDto {
            status: Some(GoalStatus::Completed),
            ..dto()
        });
        assert_eq!(goal.progress, 100);
        assert!(!goal.is_active());
    }

    #[test]
    fn test_validation_rejects_unknown_reference_values() {
        let mut goal = Goal::new_for_insert(dto(), "Kofi Boateng");
        goal.category = "Hobbies".into();
        assert!(goal.validate().unwrap_err().contains("category"));
        goal.category = "Personal".into();
        goal.alignment = "Q5 Goal".into();
        assert!(goal.validate().unwrap_err().contains("alignment"));
        goal.alignment = "Annual Objective".into();
        goal.title.clear();
        assert!(goal.validate().is_err());
    }

    #[test]
    fn test_days_left() {
        let goal = Goal::new_for_insert(dto(), "Kofi Boateng");
        assert_eq!(goal.days_left(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap()), 10);
        assert_eq!(goal.days_left(NaiveDate::from_ymd_opt(2025, 10, 2).unwrap()), -2);
    }

    #[test]
    fn test_status_labels_round_trip_wire_names() {
        let json = serde_json::to_string(&GoalStatus::NotStarted).unwrap();
        assert_eq!(json, "\"Not Started\"");
        assert_eq!(GoalStatus::from_label("at risk"), Some(GoalStatus::AtRisk));
        assert_eq!(GoalPriority::from_label("LOW"), Some(GoalPriority::Low));
    }
}
