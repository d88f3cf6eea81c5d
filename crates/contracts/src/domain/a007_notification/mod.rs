pub mod aggregate;

pub use aggregate::{
    approval_event, build_feed, deadline_reminders, kpi_events, relative_time, DeadlineReminder,
    FeedItem, Notification, NotificationFeed, NotificationId, NotificationKind,
    REMINDER_WINDOW_DAYS,
};
