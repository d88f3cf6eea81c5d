use crate::domain::a006_goal::{Goal, GoalStatus};
use crate::shared::indicators::{ChangeKind, IconColour, StatsChange, StatsDatum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: GoalStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Rounded share of completed goals, 0 when there are none.
    pub completion_rate: u32,
    /// One entry per status, in ladder order.
    pub by_status: Vec<StatusCount>,
}

pub fn summarize(goals: &[Goal]) -> GoalSummary {
    let count = |status: GoalStatus| goals.iter().filter(|g| g.status == status).count();
    let completed = count(GoalStatus::Completed);
    let completion_rate = if goals.is_empty() {
        0
    } else {
        (completed as f64 * 100.0 / goals.len() as f64).round() as u32
    };
    GoalSummary {
        total: goals.len(),
        active: goals.len() - completed,
        completed,
        completion_rate,
        by_status: GoalStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: count(status),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDashboardResponse {
    pub summary: GoalSummary,
    pub cards: Vec<StatsDatum>,
}

pub fn stats_cards(summary: &GoalSummary) -> Vec<StatsDatum> {
    vec![
        StatsDatum::integer(
            "Active Goals",
            "Bullseye",
            summary.active,
            IconColour::Info,
            StatsChange::new("Still in flight", ChangeKind::Neutral, "Clock"),
        ),
        StatsDatum::integer(
            "Completed Goals",
            "CompletedSolid",
            summary.completed,
            IconColour::Success,
            StatsChange::new("Closed out", ChangeKind::Positive, "ArrowUp"),
        ),
        StatsDatum::percent(
            "Completion Rate",
            "ProgressRingDots",
            summary.completion_rate as f64,
            IconColour::Warning,
            StatsChange::new(
                format!("{} goals in total", summary.total),
                ChangeKind::Neutral,
                "BulletedList2",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_goal::{GoalId, GoalPriority};
    use chrono::NaiveDate;

    fn goal(status: GoalStatus) -> Goal {
        Goal {
            id: GoalId(0),
            owner: "Kofi Boateng".into(),
            title: "Goal".into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            priority: GoalPriority::Medium,
            category: "Technical".into(),
            progress: 0,
            status,
            key_results: Vec::new(),
            alignment: "Q4 Goal".into(),
        }
    }

    #[test]
    fn test_summary_and_distribution() {
        let goals = vec![
            goal(GoalStatus::Completed),
            goal(GoalStatus::InProgress),
            goal(GoalStatus::AtRisk),
        ];
        let summary = summarize(&goals);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.completion_rate, 33);
        let counts: Vec<usize> = summary.by_status.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.completion_rate, 0);
        assert_eq!(summary.by_status.len(), 4);
        assert!(stats_cards(&summary).iter().all(|c| c.value == 0.0));
    }
}
