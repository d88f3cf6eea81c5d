use contracts::domain::a004_audit_entry::{known_users, AuditAction, AuditEntry, AuditFilter, AuditSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_audit_entry::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::select::{options_with_wildcard, LabeledSelect};

const ALL_USERS: &str = "All Users";
const ALL_ACTIONS: &str = "All Actions";

fn action_badge(action: AuditAction) -> AnyView {
    let color = match action {
        AuditAction::LoginFailed | AuditAction::KpiDeleted | AuditAction::KpiRejected => {
            BadgeColor::Danger
        }
        AuditAction::Login | AuditAction::Logout | AuditAction::Navigation => BadgeColor::Informative,
        AuditAction::DataExport => BadgeColor::Warning,
        _ => BadgeColor::Success,
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{action.label()}</Badge> }.into_any()
}

#[component]
fn SummaryTiles(summary: AuditSummary) -> impl IntoView {
    let tiles = [
        ("Total Activities", summary.total_activities),
        ("Today's Activities", summary.todays_activities),
        ("Active Users", summary.active_users),
        ("Failed Logins", summary.failed_logins),
    ];
    view! {
        <div class="stat-cards">
            {tiles.into_iter().map(|(label, value)| view! {
                <div class="stat-card">
                    <div class="stat-card__content">
                        <div class="stat-card__label">{label}</div>
                        <div class="stat-card__value">{value}</div>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn AuditTrail() -> impl IntoView {
    let filter = RwSignal::new(AuditFilter::default());
    let entries = RwSignal::new(Vec::<AuditEntry>::new());
    let users = RwSignal::new(Vec::<String>::new());
    let summary = RwSignal::new(None::<AuditSummary>);
    let error = RwSignal::new(None::<String>);

    // User choices come from the unfiltered log.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_entries(&AuditFilter::default()).await {
                Ok(all) => users.set(known_users(&all)),
                Err(e) => log::error!("Failed to fetch audit users: {}", e),
            }
            match api::fetch_summary().await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => log::error!("Failed to fetch audit summary: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        let current = filter.get();
        spawn_local(async move {
            match api::fetch_entries(&current).await {
                Ok(v) => {
                    entries.set(v);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch audit entries: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let user_value = Signal::derive(move || filter.with(|f| f.user.clone().unwrap_or_else(|| ALL_USERS.into())));
    let action_value = Signal::derive(move || filter.with(|f| f.action.clone().unwrap_or_else(|| ALL_ACTIONS.into())));
    let user_options = Signal::derive(move || options_with_wildcard(ALL_USERS, users.get()));
    let action_options =
        Signal::derive(|| options_with_wildcard(ALL_ACTIONS, AuditAction::ALL.iter().map(|a| a.label())));

    view! {
        <div class="page page--audit">
            <PageHeader title="Audit Trail" subtitle="Who did what, and when">
                {()}
            </PageHeader>

            {move || summary.get().map(|s| view! { <SummaryTiles summary=s /> })}

            <div class="filter-panel">
                <div class="filter-panel-content">
                    <LabeledSelect
                        label="User"
                        value=user_value
                        options=user_options
                        on_change=Callback::new(move |v: String| filter.update(|f| f.user = Some(v)))
                    />
                    <LabeledSelect
                        label="Action"
                        value=action_value
                        options=action_options
                        on_change=Callback::new(move |v: String| filter.update(|f| f.action = Some(v)))
                    />
                    <div class="form__group">
                        <label class="form__label">"Month"</label>
                        <input
                            class="form__input"
                            type="month"
                            prop:value=move || filter.with(|f| f.month.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let month = event_target_value(&ev);
                                filter.update(|f| f.month = (!month.is_empty()).then_some(month));
                            }
                        />
                    </div>
                    <button class="button button--secondary" on:click=move |_| filter.set(AuditFilter::default())>
                        "Clear"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 170px;">"Timestamp"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 170px;">"User"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px;">"Role"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Action"</TableHeaderCell>
                        <TableHeaderCell>"Details"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px;">"IP Address"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = entries.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                        "No activity matches the selected filters"
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        rows.into_iter().map(|entry| view! {
                            <TableRow>
                                <TableCell>{entry.timestamp.format("%Y-%m-%d %H:%M").to_string()}</TableCell>
                                <TableCell>{entry.user}</TableCell>
                                <TableCell>{entry.role}</TableCell>
                                <TableCell>{action_badge(entry.action)}</TableCell>
                                <TableCell>{entry.details}</TableCell>
                                <TableCell>{if entry.ip_address.is_empty() { "-".to_string() } else { entry.ip_address }}</TableCell>
                            </TableRow>
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
