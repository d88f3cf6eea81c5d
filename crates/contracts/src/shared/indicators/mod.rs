pub mod bands;

use serde::{Deserialize, Serialize};

pub use bands::{Band, BandScale, BUDGET_UTILIZATION, PROGRESS_HEALTH};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn ghs() -> Self {
        ValueFormat::Money {
            currency: "GHS".into(),
        }
    }
}

/// Colour category of a stat card icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconColour {
    Success,
    Warning,
    Info,
    Orange,
    Danger,
}

impl IconColour {
    pub fn css_class(&self) -> &'static str {
        match self {
            IconColour::Success => "stat-card__icon--success",
            IconColour::Warning => "stat-card__icon--warning",
            IconColour::Info => "stat-card__icon--info",
            IconColour::Orange => "stat-card__icon--orange",
            IconColour::Danger => "stat-card__icon--danger",
        }
    }
}

/// Direction of the change line under a stat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsChange {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub icon: String,
}

impl StatsChange {
    pub fn new(description: impl Into<String>, kind: ChangeKind, icon: &str) -> Self {
        Self {
            description: description.into(),
            kind,
            icon: icon.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// One stat card. Derived on every recomputation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDatum {
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    pub icon_colour: IconColour,
    pub change: StatsChange,
}

impl StatsDatum {
    pub fn integer(label: &str, icon: &str, value: usize, colour: IconColour, change: StatsChange) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value: value as f64,
            format: ValueFormat::Integer,
            icon_colour: colour,
            change,
        }
    }

    pub fn percent(label: &str, icon: &str, value: f64, colour: IconColour, change: StatsChange) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value,
            format: ValueFormat::Percent { decimals: 0 },
            icon_colour: colour,
            change,
        }
    }

    pub fn money(label: &str, icon: &str, value: f64, colour: IconColour, change: StatsChange) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value,
            format: ValueFormat::ghs(),
            icon_colour: colour,
            change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_datum_wire_format() {
        let datum = StatsDatum::integer(
            "At Risk",
            "IncidentTriangle",
            3,
            IconColour::Danger,
            StatsChange::new("All active", ChangeKind::Negative, "ArrowDown"),
        );
        let value = serde_json::to_value(&datum).unwrap();
        assert_eq!(value["iconColour"], "danger");
        assert_eq!(value["change"]["type"], "negative");
        assert_eq!(value["format"]["kind"], "Integer");
        assert_eq!(value["value"], 3.0);
    }
}
