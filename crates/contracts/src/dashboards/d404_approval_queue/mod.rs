use crate::domain::a001_kpi::{ApprovalStatus, Kpi};
use crate::shared::indicators::{ChangeKind, IconColour, StatsChange, StatsDatum};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many decided KPIs the "recently approved" list keeps.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalSummary {
    pub pending: usize,
    /// Approved on `today` (UTC date of the decision).
    pub approved_today: usize,
    pub total_approved: usize,
    pub rejected: usize,
}

pub fn summarize(kpis: &[Kpi], today: NaiveDate) -> ApprovalSummary {
    let mut summary = ApprovalSummary::default();
    for kpi in kpis {
        match kpi.approval.status {
            ApprovalStatus::Pending => summary.pending += 1,
            ApprovalStatus::Rejected => summary.rejected += 1,
            ApprovalStatus::Approved => {
                summary.total_approved += 1;
                if kpi.approval.decided_at.map(|at| at.date_naive()) == Some(today) {
                    summary.approved_today += 1;
                }
            }
        }
    }
    summary
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalQueue {
    pub summary: ApprovalSummary,
    pub cards: Vec<StatsDatum>,
    /// Pending KPIs, oldest first.
    pub pending: Vec<Kpi>,
    /// Latest approvals, newest first.
    pub recently_approved: Vec<Kpi>,
}

pub fn build(kpis: &[Kpi], today: NaiveDate) -> ApprovalQueue {
    let summary = summarize(kpis, today);

    let mut pending: Vec<Kpi> = kpis
        .iter()
        .filter(|k| k.approval.is_pending())
        .cloned()
        .collect();
    pending.sort_by_key(|k| k.id);

    let mut recently_approved: Vec<Kpi> = kpis
        .iter()
        .filter(|k| k.approval.status == ApprovalStatus::Approved)
        .cloned()
        .collect();
    recently_approved.sort_by(|a, b| {
        b.approval
            .decided_at
            .cmp(&a.approval.decided_at)
            .then(b.id.cmp(&a.id))
    });
    recently_approved.truncate(RECENT_LIMIT);

    ApprovalQueue {
        cards: stats_cards(&summary),
        summary,
        pending,
        recently_approved,
    }
}

pub fn stats_cards(summary: &ApprovalSummary) -> Vec<StatsDatum> {
    vec![
        StatsDatum::integer(
            "Pending Approvals",
            "Clock",
            summary.pending,
            IconColour::Warning,
            StatsChange::new("Awaiting review", ChangeKind::Neutral, "Clock"),
        ),
        StatsDatum::integer(
            "Approved Today",
            "CompletedSolid",
            summary.approved_today,
            IconColour::Success,
            StatsChange::new("Decided today", ChangeKind::Positive, "ArrowUp"),
        ),
        StatsDatum::integer(
            "Total Approved",
            "Trophy2Solid",
            summary.total_approved,
            IconColour::Info,
            StatsChange::new(
                format!("{} rejected", summary.rejected),
                ChangeKind::Neutral,
                "ErrorBadge",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::{Approval, Frequency, KpiId, KpiStatus};
    use chrono::{TimeZone, Utc};

    fn kpi(id: i64, approval: Approval) -> Kpi {
        Kpi {
            id: KpiId(id),
            indicator: format!("Indicator {id}"),
            department: "Finance".into(),
            objective: "Objective".into(),
            target: "100%".into(),
            baseline: String::new(),
            status: KpiStatus::Ongoing,
            progress: 10,
            budget: 0.0,
            frequency: Frequency::Quarterly,
            activities: String::new(),
            verification: String::new(),
            comments: String::new(),
            timeline_start: "2025-01-01".into(),
            timeline_end: "2025-12-31".into(),
            approval,
        }
    }

    fn approved_on(day: u32, hour: u32) -> Approval {
        Approval::approved(
            "BDC Reviewer",
            Utc.with_ymd_and_hms(2025, 8, day, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_summary_counts_by_decision() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        let rejected = Approval {
            status: ApprovalStatus::Rejected,
            ..Default::default()
        };
        let kpis = vec![
            kpi(1, Approval::default()),
            kpi(2, approved_on(16, 9)),
            kpi(3, approved_on(15, 17)),
            kpi(4, rejected),
            kpi(5, Approval::default()),
        ];
        let summary = summarize(&kpis, today);
        assert_eq!(
            summary,
            ApprovalSummary {
                pending: 2,
                approved_today: 1,
                total_approved: 2,
                rejected: 1,
            }
        );
        let cards = stats_cards(&summary);
        assert_eq!(cards[0].value, 2.0);
        assert_eq!(cards[2].change.description, "1 rejected");
    }

    #[test]
    fn test_queue_orders_and_limits_lists() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        let mut kpis: Vec<Kpi> = (1..=7).map(|i| kpi(i, approved_on(i as u32, 8))).collect();
        kpis.push(kpi(9, Approval::default()));
        kpis.push(kpi(8, Approval::default()));

        let queue = build(&kpis, today);
        let pending: Vec<i64> = queue.pending.iter().map(|k| k.id.0).collect();
        assert_eq!(pending, vec![8, 9]);
        let recent: Vec<i64> = queue.recently_approved.iter().map(|k| k.id.0).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_empty_queue() {
        let queue = build(&[], NaiveDate::from_ymd_opt(2025, 8, 16).unwrap());
        assert_eq!(queue.summary, ApprovalSummary::default());
        assert!(queue.pending.is_empty());
        assert!(queue.cards.iter().all(|c| c.value == 0.0));
    }
}
