use crate::domain::a002_performance_cycle::{CycleStatus, PerformanceCycle};
use crate::shared::indicators::{ChangeKind, IconColour, StatsChange, StatsDatum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub total_cycles: usize,
    pub active_cycles: usize,
    /// Participants summed over active cycles only.
    pub active_participants: u32,
    /// Rounded mean completion over all cycles.
    pub average_completion: u32,
}

pub fn summarize(cycles: &[PerformanceCycle]) -> CycleSummary {
    let active: Vec<&PerformanceCycle> = cycles
        .iter()
        .filter(|c| c.status == CycleStatus::Active)
        .collect();
    let average_completion = if cycles.is_empty() {
        0
    } else {
        let sum: u32 = cycles.iter().map(|c| c.progress as u32).sum();
        (sum as f64 / cycles.len() as f64).round() as u32
    };
    CycleSummary {
        total_cycles: cycles.len(),
        active_cycles: active.len(),
        active_participants: active.iter().map(|c| c.participants).sum(),
        average_completion,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDashboardResponse {
    pub summary: CycleSummary,
    pub cards: Vec<StatsDatum>,
}

pub fn stats_cards(summary: &CycleSummary) -> Vec<StatsDatum> {
    vec![
        StatsDatum::integer(
            "Total Cycles",
            "Calendar",
            summary.total_cycles,
            IconColour::Info,
            StatsChange::new("All review periods", ChangeKind::Neutral, "Calendar"),
        ),
        StatsDatum::integer(
            "Active Cycles",
            "Play",
            summary.active_cycles,
            IconColour::Success,
            StatsChange::new("Currently running", ChangeKind::Positive, "ArrowUp"),
        ),
        StatsDatum::integer(
            "Active Participants",
            "Group",
            summary.active_participants as usize,
            IconColour::Orange,
            StatsChange::new("In active cycles", ChangeKind::Neutral, "Group"),
        ),
        StatsDatum::percent(
            "Avg. Completion",
            "ProgressRingDots",
            summary.average_completion as f64,
            IconColour::Warning,
            StatsChange::new("Across all cycles", ChangeKind::Neutral, "Clock"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_performance_cycle::{CycleId, CycleType};
    use chrono::NaiveDate;

    fn cycle(status: CycleStatus, participants: u32, progress: u8) -> PerformanceCycle {
        PerformanceCycle {
            id: CycleId(0),
            name: "Cycle".into(),
            cycle_type: CycleType::Quarterly,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            status,
            participants,
            progress,
        }
    }

    #[test]
    fn test_summary() {
        let cycles = vec![
            cycle(CycleStatus::Active, 45, 65),
            cycle(CycleStatus::Completed, 120, 100),
            cycle(CycleStatus::Active, 12, 30),
            cycle(CycleStatus::Draft, 8, 0),
        ];
        let summary = summarize(&cycles);
        assert_eq!(summary.total_cycles, 4);
        assert_eq!(summary.active_cycles, 2);
        assert_eq!(summary.active_participants, 57);
        assert_eq!(summary.average_completion, 49);
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary, CycleSummary::default());
        assert!(stats_cards(&summary).iter().all(|c| c.value == 0.0));
    }
}
