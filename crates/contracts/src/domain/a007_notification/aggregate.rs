use crate::domain::a001_kpi::{ApprovalStatus, Kpi, KpiId, KpiStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

crate::integer_id!(
    /// Unique notification identifier
    NotificationId
);

/// Days ahead of a KPI's timeline end that a deadline reminder appears.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Achievement,
    #[default]
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::Alert,
        NotificationKind::Achievement,
        NotificationKind::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Alert => "alert",
            NotificationKind::Achievement => "achievement",
            NotificationKind::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Alert => "IncidentTriangle",
            NotificationKind::Achievement => "Trophy2Solid",
            NotificationKind::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub created_at: DateTime<Utc>,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub department: String,
    pub read: bool,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId(0),
            created_at: Utc::now(),
            kind,
            title: title.into(),
            message: message.into(),
            department: department.into(),
            read: false,
        }
    }
}

/// Notifications raised by saving a KPI. `before` is `None` for a new KPI;
/// saving an unchanged KPI raises nothing.
pub fn kpi_events(before: Option<&Kpi>, after: &Kpi) -> Vec<Notification> {
    let dept = after.department.as_str();
    let Some(before) = before else {
        return vec![Notification::new(
            NotificationKind::Info,
            "KPI Created",
            format!("{} was added and awaits approval", after.indicator),
            dept,
        )];
    };
    if before == after {
        return Vec::new();
    }

    let mut events = Vec::new();
    if before.status != after.status {
        match after.status {
            KpiStatus::Achieved => events.push(Notification::new(
                NotificationKind::Achievement,
                "KPI Target Achieved",
                format!("{} reached its target of {}", after.indicator, after.target),
                dept,
            )),
            KpiStatus::AtRisk => events.push(Notification::new(
                NotificationKind::Alert,
                "KPI At Risk",
                format!("{} is at risk at {}% progress", after.indicator, after.progress),
                dept,
            )),
            _ => {}
        }
    }
    if before.budget != after.budget {
        events.push(Notification::new(
            NotificationKind::Info,
            "KPI Updated",
            format!("Budget allocation updated for {}", after.indicator),
            dept,
        ));
    }
    if events.is_empty() {
        events.push(Notification::new(
            NotificationKind::Info,
            "KPI Updated",
            format!("{} was updated", after.indicator),
            dept,
        ));
    }
    events
}

/// Notification for a reviewer decision, `None` while still pending.
pub fn approval_event(kpi: &Kpi) -> Option<Notification> {
    let by = kpi.approval.decided_by.as_str();
    match kpi.approval.status {
        ApprovalStatus::Pending => None,
        ApprovalStatus::Approved => Some(Notification::new(
            NotificationKind::Achievement,
            "KPI Approved",
            format!("{} was approved by {}", kpi.indicator, by),
            kpi.department.as_str(),
        )),
        ApprovalStatus::Rejected => Some(Notification::new(
            NotificationKind::Alert,
            "KPI Rejected",
            format!("{} was rejected by {}: {}", kpi.indicator, by, kpi.approval.note),
            kpi.department.as_str(),
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineReminder {
    pub kpi_id: KpiId,
    pub indicator: String,
    pub department: String,
    pub due: NaiveDate,
    pub days_left: i64,
}

/// Open KPIs whose timeline ends within `window_days` of `today`, soonest
/// first. KPIs with a malformed end date are skipped.
pub fn deadline_reminders(kpis: &[Kpi], today: NaiveDate, window_days: i64) -> Vec<DeadlineReminder> {
    let mut reminders: Vec<DeadlineReminder> = kpis
        .iter()
        .filter(|k| matches!(k.status, KpiStatus::Ongoing | KpiStatus::AtRisk))
        .filter_map(|k| {
            let due = k.end_date()?;
            let days_left = (due - today).num_days();
            (0..=window_days).contains(&days_left).then(|| DeadlineReminder {
                kpi_id: k.id,
                indicator: k.indicator.clone(),
                department: k.department.clone(),
                due,
                days_left,
            })
        })
        .collect();
    reminders.sort_by_key(|r| (r.days_left, r.kpi_id));
    reminders
}

/// "just now", "5 minutes ago", "1 hour ago", "3 days ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(flatten)]
    pub notification: Notification,
    pub time: String,
}

/// Everything the notifications screen shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    pub unread: usize,
    /// Newest first.
    pub items: Vec<FeedItem>,
    pub reminders: Vec<DeadlineReminder>,
}

pub fn build_feed(notifications: &[Notification], kpis: &[Kpi], now: DateTime<Utc>) -> NotificationFeed {
    let mut items: Vec<FeedItem> = notifications
        .iter()
        .map(|n| FeedItem {
            notification: n.clone(),
            time: relative_time(n.created_at, now),
        })
        .collect();
    items.sort_by(|a, b| {
        b.notification
            .created_at
            .cmp(&a.notification.created_at)
            .then(b.notification.id.cmp(&a.notification.id))
    });
    NotificationFeed {
        unread: notifications.iter().filter(|n| !n.read).count(),
        items,
        reminders: deadline_reminders(kpis, now.date_naive(), REMINDER_WINDOW_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::{Approval, Frequency};
    use chrono::{Duration, TimeZone};

    fn kpi(status: KpiStatus, end: &str) -> Kpi {
        Kpi {
            id: KpiId(1),
            indicator: "Customer Satisfaction Score".into(),
            department: "Marketing".into(),
            objective: "Objective".into(),
            target: "90%".into(),
            baseline: String::new(),
            status,
            progress: 40,
            budget: 100.0,
            frequency: Frequency::Monthly,
            activities: String::new(),
            verification: String::new(),
            comments: String::new(),
            timeline_start: "2025-01-01".into(),
            timeline_end: end.into(),
            approval: Approval::default(),
        }
    }

    #[test]
    fn test_new_kpi_raises_info() {
        let events = kpi_events(None, &kpi(KpiStatus::Ongoing, "2025-12-31"));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, NotificationKind::Info);
        assert_eq!(events[0].title, "KPI Created");
        assert_eq!(events[0].department, "Marketing");
        assert!(!events[0].read);
    }

    #[test]
    fn test_status_and_budget_changes() {
        let before = kpi(KpiStatus::Ongoing, "2025-12-31");
        let mut after = before.clone();
        after.status = KpiStatus::Achieved;
        after.budget = 150.0;
        let titles: Vec<String> = kpi_events(Some(&before), &after)
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["KPI Target Achieved", "KPI Updated"]);

        let mut at_risk = before.clone();
        at_risk.status = KpiStatus::AtRisk;
        let events = kpi_events(Some(&before), &at_risk);
        assert_eq!(events[0].kind, NotificationKind::Alert);

        let mut renamed = before.clone();
        renamed.comments = "Reviewed".into();
        let events = kpi_events(Some(&before), &renamed);
        assert_eq!(events[0].message, "Customer Satisfaction Score was updated");

        assert!(kpi_events(Some(&before), &before).is_empty());
    }

    #[test]
    fn test_approval_event() {
        let mut k = kpi(KpiStatus::Ongoing, "2025-12-31");
        assert!(approval_event(&k).is_none());
        k.approval = Approval::approved("Kwame Asante", Utc::now());
        let event = approval_event(&k).unwrap();
        assert_eq!(event.kind, NotificationKind::Achievement);
        assert!(event.message.ends_with("by Kwame Asante"));
    }

    #[test]
    fn test_deadline_reminders_window() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        let mut soon = kpi(KpiStatus::Ongoing, "2025-08-20");
        soon.id = KpiId(2);
        let mut today_due = kpi(KpiStatus::AtRisk, "2025-08-16");
        today_due.id = KpiId(3);
        let kpis = vec![
            soon,
            today_due,
            kpi(KpiStatus::Ongoing, "2025-09-30"),
            kpi(KpiStatus::Achieved, "2025-08-18"),
            kpi(KpiStatus::Ongoing, "2025-08-10"),
            kpi(KpiStatus::Ongoing, "not a date"),
        ];
        let reminders = deadline_reminders(&kpis, today, REMINDER_WINDOW_DAYS);
        let got: Vec<(i64, i64)> = reminders.iter().map(|r| (r.kpi_id.0, r.days_left)).collect();
        assert_eq!(got, vec![(3, 0), (2, 4)]);
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 8, 16, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now + Duration::minutes(5), now), "just now");
    }

    #[test]
    fn test_feed_counts_unread_and_sorts_newest_first() {
        let now = Utc.with_ymd_and_hms(2025, 8, 16, 12, 0, 0).unwrap();
        let mut old = Notification::new(NotificationKind::Info, "Old", "m", "HR");
        old.id = NotificationId(1);
        old.created_at = now - Duration::hours(3);
        old.read = true;
        let mut new = Notification::new(NotificationKind::Alert, "New", "m", "HR");
        new.id = NotificationId(2);
        new.created_at = now - Duration::minutes(5);

        let feed = build_feed(&[old, new], &[], now);
        assert_eq!(feed.unread, 1);
        assert_eq!(feed.items[0].notification.title, "New");
        assert_eq!(feed.items[0].time, "5 minutes ago");
        assert_eq!(feed.items[1].time, "3 hours ago");
        assert!(feed.reminders.is_empty());
    }
}
