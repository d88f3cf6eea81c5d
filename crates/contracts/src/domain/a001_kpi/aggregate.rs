use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::approval::Approval;

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id!(
    /// Unique KPI identifier
    KpiId
);

// ============================================================================
// Reference values
// ============================================================================

/// Departments a KPI can belong to.
pub const DEPARTMENTS: [&str; 6] = ["Operations", "Finance", "Marketing", "HR", "IT", "Sales"];

/// Date format used for KPI timelines.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layouts accepted in place of a bare date.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn is_known_department(name: &str) -> bool {
    DEPARTMENTS.iter().any(|d| *d == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum KpiStatus {
    #[default]
    Ongoing,
    Achieved,
    #[serde(rename = "At Risk")]
    AtRisk,
    Missed,
}

impl KpiStatus {
    pub const ALL: [KpiStatus; 4] = [
        KpiStatus::Ongoing,
        KpiStatus::Achieved,
        KpiStatus::AtRisk,
        KpiStatus::Missed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            KpiStatus::Ongoing => "Ongoing",
            KpiStatus::Achieved => "Achieved",
            KpiStatus::AtRisk => "At Risk",
            KpiStatus::Missed => "Missed",
        }
    }

    /// Parses a display label, ignoring case and surrounding blanks.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(wanted))
    }

    /// CSS modifier used by status tags.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            KpiStatus::Ongoing => "ongoing",
            KpiStatus::Achieved => "achieved",
            KpiStatus::AtRisk => "at-risk",
            KpiStatus::Missed => "missed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annually,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        if wanted.eq_ignore_ascii_case("annual") {
            return Some(Frequency::Annually);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(wanted))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Key Performance Indicator tracked by one department.
///
/// Timeline dates are kept as the text they were entered with. Rows that
/// reached the store before validation existed may hold unparseable dates,
/// so readers go through [`Kpi::start_date`] / [`Kpi::start_year`] instead of
/// assuming a valid calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: KpiId,
    pub indicator: String,
    pub department: String,
    pub objective: String,
    pub target: String,
    #[serde(default)]
    pub baseline: String,
    pub status: KpiStatus,
    pub progress: u8,
    pub budget: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub verification: String,
    #[serde(default)]
    pub comments: String,
    pub timeline_start: String,
    pub timeline_end: String,
    #[serde(default)]
    pub approval: Approval,
}

impl Kpi {
    /// Builds a KPI from a form DTO. The id is assigned by the store.
    pub fn new_for_insert(dto: KpiDto) -> Self {
        let mut kpi = Self {
            id: KpiId(0),
            indicator: String::new(),
            department: String::new(),
            objective: String::new(),
            target: String::new(),
            baseline: String::new(),
            status: KpiStatus::default(),
            progress: 0,
            budget: 0.0,
            frequency: Frequency::default(),
            activities: String::new(),
            verification: String::new(),
            comments: String::new(),
            timeline_start: String::new(),
            timeline_end: String::new(),
            approval: Approval::default(),
        };
        kpi.update(&dto);
        kpi
    }

    /// Copies editable fields from the DTO. Optional fields the DTO leaves
    /// out keep their current value. The approval state is not editable here.
    pub fn update(&mut self, dto: &KpiDto) {
        self.indicator = dto.indicator.trim().to_string();
        self.department = dto.department.trim().to_string();
        self.objective = dto.objective.trim().to_string();
        self.target = dto.target.trim().to_string();
        if let Some(baseline) = &dto.baseline {
            self.baseline = baseline.clone();
        }
        self.status = dto.status.unwrap_or(self.status);
        self.progress = dto.progress.unwrap_or(self.progress);
        self.budget = dto.budget.unwrap_or(self.budget);
        self.frequency = dto.frequency.unwrap_or(self.frequency);
        if let Some(activities) = &dto.activities {
            self.activities = activities.clone();
        }
        if let Some(verification) = &dto.verification {
            self.verification = verification.clone();
        }
        if let Some(comments) = &dto.comments {
            self.comments = comments.clone();
        }
        self.timeline_start = dto.timeline_start.trim().to_string();
        self.timeline_end = dto.timeline_end.trim().to_string();
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.timeline_start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.timeline_end)
    }

    /// Calendar year of the timeline start, `None` for malformed dates.
    pub fn start_year(&self) -> Option<i32> {
        self.start_date().map(|d| d.year())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.indicator.trim().is_empty() {
            return Err("Indicator must not be empty".into());
        }
        if self.objective.trim().is_empty() {
            return Err("Objective must not be empty".into());
        }
        if !is_known_department(&self.department) {
            return Err(format!("Unknown department '{}'", self.department));
        }
        if self.progress > 100 {
            return Err(format!(
                "Progress must be between 0 and 100, got {}",
                self.progress
            ));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err("Budget must be a non-negative amount".into());
        }
        let start = self
            .start_date()
            .ok_or_else(|| format!("Invalid timeline start '{}'", self.timeline_start))?;
        let end = self
            .end_date()
            .ok_or_else(|| format!("Invalid timeline end '{}'", self.timeline_end))?;
        if start > end {
            return Err("Timeline start must not be after timeline end".into());
        }
        Ok(())
    }
}

/// Parses a timeline date. The whole value must be a `YYYY-MM-DD` date or a
/// timestamp whose date part is followed by `T` or a blank; anything else,
/// trailing text included, is malformed.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    match trimmed.as_bytes().get(10) {
        Some(b'T') | Some(b' ') => parse_timestamp(trimmed),
        _ => None,
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDate> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.date_naive());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|at| at.date())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for KPI create / update. `id == None` creates a new record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiDto {
    pub id: Option<KpiId>,
    pub indicator: String,
    pub department: String,
    pub objective: String,
    pub target: String,
    #[serde(default)]
    pub baseline: Option<String>,
    #[serde(default)]
    pub status: Option<KpiStatus>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub verification: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    pub timeline_start: String,
    pub timeline_end: String,
}

impl From<&Kpi> for KpiDto {
    fn from(k: &Kpi) -> Self {
        Self {
            id: Some(k.id),
            indicator: k.indicator.clone(),
            department: k.department.clone(),
            objective: k.objective.clone(),
            target: k.target.clone(),
            baseline: Some(k.baseline.clone()),
            status: Some(k.status),
            progress: Some(k.progress),
            budget: Some(k.budget),
            frequency: Some(k.frequency),
            activities: Some(k.activities.clone()),
            verification: Some(k.verification.clone()),
            comments: Some(k.comments.clone()),
            timeline_start: k.timeline_start.clone(),
            timeline_end: k.timeline_end.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> KpiDto {
        KpiDto {
            indicator: "Equipment Uptime Percentage".into(),
            department: "Operations".into(),
            objective: "Maintain optimal equipment performance".into(),
            target: "95%".into(),
            progress: Some(40),
            budget: Some(150_000.0),
            timeline_start: "2025-01-01".into(),
            timeline_end: "2025-07-31".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_for_insert_defaults() {
        let kpi = Kpi::new_for_insert(sample_dto());
        assert_eq!(kpi.status, KpiStatus::Ongoing);
        assert_eq!(kpi.frequency, Frequency::Monthly);
        assert_eq!(kpi.progress, 40);
        assert!(kpi.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_reversed_timeline() {
        let mut dto = sample_dto();
        dto.timeline_start = "2025-08-01".into();
        let kpi = Kpi::new_for_insert(dto);
        assert!(kpi.validate().unwrap_err().contains("after"));
    }

    #[test]
    fn test_validate_rejects_progress_over_100() {
        let mut dto = sample_dto();
        dto.progress = Some(101);
        assert!(Kpi::new_for_insert(dto).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_department() {
        let mut dto = sample_dto();
        dto.department = "Legal".into();
        assert!(Kpi::new_for_insert(dto).validate().is_err());
    }

    #[test]
    fn test_start_year_tolerates_bad_dates() {
        let mut kpi = Kpi::new_for_insert(sample_dto());
        assert_eq!(kpi.start_year(), Some(2025));
        kpi.timeline_start = "sometime".into();
        assert_eq!(kpi.start_year(), None);
        kpi.timeline_start = "2024-06-01T00:00:00Z".into();
        assert_eq!(kpi.start_year(), Some(2024));
    }

    #[test]
    fn test_trailing_garbage_date_is_malformed() {
        let mut kpi = Kpi::new_for_insert(sample_dto());
        kpi.timeline_start = "2025-01-01-garbage".into();
        kpi.timeline_end = "2025-12-31???".into();
        assert_eq!(kpi.start_year(), None);
        assert_eq!(kpi.end_date(), None);
        assert!(kpi.validate().unwrap_err().contains("timeline start"));

        kpi.timeline_start = "2025-01-01".into();
        assert!(kpi.validate().unwrap_err().contains("timeline end"));
    }

    #[test]
    fn test_parse_date_accepts_dates_and_timestamps_only() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert_eq!(parse_date(" 2024-06-01 "), expected);
        assert_eq!(parse_date("2024-06-01T08:30:00Z"), expected);
        assert_eq!(parse_date("2024-06-01T08:30:00+02:00"), expected);
        assert_eq!(parse_date("2024-06-01T08:30:00"), expected);
        assert_eq!(parse_date("2024-06-01 08:30:00.250"), expected);
        assert_eq!(parse_date("2024-06-01Tnoon"), None);
        assert_eq!(parse_date("2024-06-01 and later"), None);
        assert_eq!(parse_date("2024-06-01x"), None);
        assert_eq!(parse_date("2024-06"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_update_keeps_omitted_optional_fields() {
        let mut dto = sample_dto();
        dto.baseline = Some("88%".into());
        dto.activities = Some("Weekly maintenance".into());
        dto.verification = Some("Plant logs".into());
        dto.comments = Some("On track".into());
        let mut kpi = Kpi::new_for_insert(dto);

        let change = KpiDto {
            progress: None,
            budget: None,
            ..sample_dto()
        };
        kpi.update(&change);
        assert_eq!(kpi.baseline, "88%");
        assert_eq!(kpi.activities, "Weekly maintenance");
        assert_eq!(kpi.verification, "Plant logs");
        assert_eq!(kpi.comments, "On track");
        assert_eq!(kpi.progress, 40);
        assert_eq!(kpi.budget, 150_000.0);

        kpi.update(&KpiDto {
            comments: Some(String::new()),
            ..sample_dto()
        });
        assert_eq!(kpi.comments, "");
        assert_eq!(kpi.baseline, "88%");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(KpiStatus::from_label("at risk"), Some(KpiStatus::AtRisk));
        assert_eq!(KpiStatus::from_label("Done"), None);
        let json = serde_json::to_string(&KpiStatus::AtRisk).unwrap();
        assert_eq!(json, "\"At Risk\"");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let kpi = Kpi::new_for_insert(sample_dto());
        let value = serde_json::to_value(&kpi).unwrap();
        assert_eq!(value["timelineStart"], "2025-01-01");
        assert_eq!(value["id"], 0);
    }
}
