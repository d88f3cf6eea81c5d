use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id!(
    /// Unique performance cycle identifier
    CycleId
);

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CycleType {
    #[default]
    Quarterly,
    Annual,
    Probation,
}

impl CycleType {
    pub const ALL: [CycleType; 3] = [CycleType::Quarterly, CycleType::Annual, CycleType::Probation];

    pub fn label(&self) -> &'static str {
        match self {
            CycleType::Quarterly => "Quarterly",
            CycleType::Annual => "Annual",
            CycleType::Probation => "Probation",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Review cycle status. Moves only forward: Draft -> Active -> Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum CycleStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

impl CycleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CycleStatus::Draft => "Draft",
            CycleStatus::Active => "Active",
            CycleStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [CycleStatus::Draft, CycleStatus::Active, CycleStatus::Completed]
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }

    /// The next status on the ladder, `None` once completed.
    pub fn next(&self) -> Option<CycleStatus> {
        match self {
            CycleStatus::Draft => Some(CycleStatus::Active),
            CycleStatus::Active => Some(CycleStatus::Completed),
            CycleStatus::Completed => None,
        }
    }

    pub fn can_transition_to(&self, target: CycleStatus) -> bool {
        self.next() == Some(target)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCycle {
    pub id: CycleId,
    pub name: String,
    #[serde(rename = "type")]
    pub cycle_type: CycleType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CycleStatus,
    pub participants: u32,
    /// Completion percentage, 0..=100
    pub progress: u8,
}

impl PerformanceCycle {
    /// New cycles always start as drafts with no completion.
    pub fn new_for_insert(dto: PerformanceCycleDto) -> Self {
        Self {
            id: CycleId(0),
            name: dto.name.trim().to_string(),
            cycle_type: dto.cycle_type,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: CycleStatus::Draft,
            participants: dto.participants.unwrap_or(0),
            progress: 0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Cycle name must not be empty".into());
        }
        if self.start_date > self.end_date {
            return Err("Cycle start must not be after cycle end".into());
        }
        if self.progress > 100 {
            return Err(format!(
                "Completion must be between 0 and 100, got {}",
                self.progress
            ));
        }
        Ok(())
    }

    /// Moves the cycle one step along the status ladder.
    pub fn advance(&mut self) -> Result<CycleStatus, String> {
        let next = self
            .status
            .next()
            .ok_or_else(|| format!("Cycle '{}' is already completed", self.name))?;
        self.status = next;
        if next == CycleStatus::Completed {
            self.progress = 100;
        }
        Ok(next)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCycleDto {
    pub name: String,
    #[serde(rename = "type")]
    pub cycle_type: CycleType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub participants: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PerformanceCycleDto {
        PerformanceCycleDto {
            name: "Q3 2025 Performance Review".into(),
            cycle_type: CycleType::Quarterly,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            participants: Some(45),
        }
    }

    #[test]
    fn test_new_cycle_is_draft() {
        let cycle = PerformanceCycle::new_for_insert(dto());
        assert_eq!(cycle.status, CycleStatus::Draft);
        assert_eq!(cycle.progress, 0);
        assert!(cycle.validate().is_ok());
    }

    #[test]
    fn test_status_ladder() {
        let mut cycle = PerformanceCycle::new_for_insert(dto());
        assert_eq!(cycle.advance(), Ok(CycleStatus::Active));
        assert_eq!(cycle.advance(), Ok(CycleStatus::Completed));
        assert_eq!(cycle.progress, 100);
        assert!(cycle.advance().is_err());
        assert_eq!(cycle.status, CycleStatus::Completed);
    }

    #[test]
    fn test_transitions_only_forward_by_one() {
        assert!(CycleStatus::Draft.can_transition_to(CycleStatus::Active));
        assert!(!CycleStatus::Draft.can_transition_to(CycleStatus::Completed));
        assert!(!CycleStatus::Completed.can_transition_to(CycleStatus::Draft));
    }

    #[test]
    fn test_validate_dates() {
        let mut d = dto();
        d.end_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(PerformanceCycle::new_for_insert(d).validate().is_err());
    }

    #[test]
    fn test_type_serialized_as_type() {
        let value = serde_json::to_value(PerformanceCycle::new_for_insert(dto())).unwrap();
        assert_eq!(value["type"], "Quarterly");
        assert_eq!(value["startDate"], "2025-07-01");
    }
}
