use serde::{Deserialize, Serialize};

pub const GREEN: &str = "#10b981";
pub const BLUE: &str = "#3b82f6";
pub const RED: &str = "#ef4444";
pub const AMBER: &str = "#f59e0b";

/// Position of a percentage on a three-step colour scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    High,
    Mid,
    Low,
}

/// Three-band step function over a percentage.
///
/// `value >= high_from` is High, `value >= mid_from` is Mid, everything else
/// (including negatives) is Low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub name: &'static str,
    pub high_from: f64,
    pub mid_from: f64,
    pub high_colour: &'static str,
    pub mid_colour: &'static str,
    pub low_colour: &'static str,
}

/// Health of average KPI progress.
pub const PROGRESS_HEALTH: BandScale = BandScale {
    name: "progress_health",
    high_from: 90.0,
    mid_from: 75.0,
    high_colour: GREEN,
    mid_colour: BLUE,
    low_colour: RED,
};

/// Share of a department budget already spent.
pub const BUDGET_UTILIZATION: BandScale = BandScale {
    name: "budget_utilization",
    high_from: 90.0,
    mid_from: 80.0,
    high_colour: GREEN,
    mid_colour: BLUE,
    low_colour: AMBER,
};

impl BandScale {
    pub fn band(&self, value: f64) -> Band {
        if value >= self.high_from {
            Band::High
        } else if value >= self.mid_from {
            Band::Mid
        } else {
            Band::Low
        }
    }

    pub fn colour(&self, value: f64) -> &'static str {
        match self.band(value) {
            Band::High => self.high_colour,
            Band::Mid => self.mid_colour,
            Band::Low => self.low_colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_health_edges() {
        assert_eq!(PROGRESS_HEALTH.colour(90.0), GREEN);
        assert_eq!(PROGRESS_HEALTH.colour(89.0), BLUE);
        assert_eq!(PROGRESS_HEALTH.colour(75.0), BLUE);
        assert_eq!(PROGRESS_HEALTH.colour(74.0), RED);
        assert_eq!(PROGRESS_HEALTH.colour(0.0), RED);
        assert_eq!(PROGRESS_HEALTH.colour(120.0), GREEN);
    }

    #[test]
    fn test_budget_utilization_edges() {
        assert_eq!(BUDGET_UTILIZATION.band(90.0), Band::High);
        assert_eq!(BUDGET_UTILIZATION.band(80.0), Band::Mid);
        assert_eq!(BUDGET_UTILIZATION.band(79.0), Band::Low);
        assert_eq!(BUDGET_UTILIZATION.colour(79.0), AMBER);
    }
}
