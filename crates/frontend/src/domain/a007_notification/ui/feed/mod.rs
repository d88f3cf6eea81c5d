use contracts::domain::a007_notification::{DeadlineReminder, NotificationFeed, NotificationId, NotificationKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_notification::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Alert => "notification__icon notification__icon--alert",
        NotificationKind::Achievement => "notification__icon notification__icon--achievement",
        NotificationKind::Info => "notification__icon notification__icon--info",
    }
}

/// "Due today" or "Due in 3 days (2025-09-30)".
pub fn reminder_caption(reminder: &DeadlineReminder) -> String {
    let due = reminder.due.format("%Y-%m-%d");
    match reminder.days_left {
        0 => format!("Due today ({})", due),
        1 => format!("Due tomorrow ({})", due),
        n => format!("Due in {} days ({})", n, due),
    }
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let feed = RwSignal::new(NotificationFeed::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_feed().await {
                Ok(f) => {
                    feed.set(f);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch notifications: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let mark_read = move |id: NotificationId| {
        spawn_local(async move {
            match api::mark_read(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => error.set(Some(format!("Cannot mark notification {}: {}", id, e))),
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            match api::mark_all_read().await {
                Ok(changed) => {
                    log::info!("{} notifications marked as read", changed);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(format!("Cannot mark notifications: {}", e))),
            }
        });
    };

    view! {
        <div class="page page--notifications">
            {move || view! {
                <PageHeader
                    title="Notifications & Reminders"
                    subtitle=format!("{} unread", feed.with(|f| f.unread))
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=mark_all
                        disabled=Signal::derive(move || feed.with(|f| f.unread == 0))
                    >
                        {icon("check")}
                        " Mark all as read"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload.update(|n| *n += 1)
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="panel">
                <h3 class="panel__title">"Upcoming Deadlines"</h3>
                {move || {
                    let reminders = feed.with(|f| f.reminders.clone());
                    if reminders.is_empty() {
                        return view! { <div class="panel__empty">"No KPI is due this week"</div> }.into_any();
                    }
                    view! {
                        <ul class="notification-list">
                            {reminders.into_iter().map(|r| {
                                let caption = reminder_caption(&r);
                                view! {
                                    <li class="notification">
                                        <span class=kind_class(NotificationKind::Alert)>{icon("Calendar")}</span>
                                        <div class="notification__body">
                                            <div class="notification__title">{r.indicator}</div>
                                            <div class="notification__message">{format!("{} · {}", r.department, caption)}</div>
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </div>

            <div class="panel">
                <h3 class="panel__title">"Recent Activity"</h3>
                {move || {
                    let items = feed.with(|f| f.items.clone());
                    if items.is_empty() {
                        let text = if loading.get() { "Loading..." } else { "No notifications" };
                        return view! { <div class="panel__empty">{text}</div> }.into_any();
                    }
                    view! {
                        <ul class="notification-list">
                            {items.into_iter().map(|item| {
                                let n = item.notification;
                                let id = n.id;
                                let row_class = if n.read { "notification" } else { "notification notification--unread" };
                                view! {
                                    <li class=row_class>
                                        <span class=kind_class(n.kind)>{icon(n.kind.icon())}</span>
                                        <div class="notification__body">
                                            <div class="notification__title">{n.title}</div>
                                            <div class="notification__message">{n.message}</div>
                                            <div class="notification__time">{format!("{} · {}", n.department, item.time)}</div>
                                        </div>
                                        {(!n.read).then(|| view! {
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| mark_read(id)
                                            >
                                                "Mark read"
                                            </Button>
                                        })}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_kpi::KpiId;

    fn reminder(days_left: i64) -> DeadlineReminder {
        DeadlineReminder {
            kpi_id: KpiId(1),
            indicator: "Customer Satisfaction".into(),
            department: "Sales".into(),
            due: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            days_left,
        }
    }

    #[test]
    fn test_reminder_caption() {
        assert_eq!(reminder_caption(&reminder(0)), "Due today (2025-09-30)");
        assert_eq!(reminder_caption(&reminder(1)), "Due tomorrow (2025-09-30)");
        assert_eq!(reminder_caption(&reminder(4)), "Due in 4 days (2025-09-30)");
    }
}
