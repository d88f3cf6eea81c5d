use contracts::dashboards::d404_approval_queue::ApprovalQueue;
use contracts::domain::a001_kpi::{ApprovalDecision, ApprovalRequest, Kpi, KpiId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d404_approval_queue::api;
use crate::domain::a001_kpi::api as kpi_api;
use crate::domain::a001_kpi::ui::list::status_badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCards;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Request body for a decision. A rejection needs a reason, checked here
/// before the round trip.
pub fn decision_request(decision: ApprovalDecision, note: &str) -> Result<ApprovalRequest, String> {
    let note = note.trim();
    if decision == ApprovalDecision::Reject && note.is_empty() {
        return Err("Enter a reason before rejecting".into());
    }
    Ok(ApprovalRequest {
        decision,
        note: note.to_string(),
    })
}

fn decided_line(kpi: &Kpi) -> String {
    let when = kpi
        .approval
        .decided_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    format!("{} · {}", kpi.approval.decided_by, when)
}

#[component]
pub fn ApprovalQueuePage() -> impl IntoView {
    let queue = RwSignal::new(None::<ApprovalQueue>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_queue().await {
                Ok(q) => {
                    queue.set(Some(q));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch approval queue: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let decide = move |id: KpiId, decision: ApprovalDecision, note: String| {
        let request = match decision_request(decision, &note) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        spawn_local(async move {
            match kpi_api::decide(id, &request).await {
                Ok(kpi) => {
                    log::info!("KPI {} is now {}", id, kpi.approval.status.label());
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(format!("Cannot decide KPI {}: {}", id, e))),
            }
        });
    };

    let cards = Signal::derive(move || {
        queue.with(|q| q.as_ref().map(|q| q.cards.clone()).unwrap_or_default())
    });

    view! {
        <div class="page page--approvals">
            <PageHeader title="Approval Queue" subtitle="KPIs waiting for a review decision">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.update(|n| *n += 1)
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <StatCards cards=cards />

            <div class="panel">
                <h3 class="panel__title">"Pending KPIs"</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Indicator"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 170px;">"Department"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 110px;">"Status"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 140px;">"Budget"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 220px;">"Reason"</TableHeaderCell>
                            <TableHeaderCell attr:style="width: 200px; text-align: center;">"Decision"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let pending = queue.with(|q| q.as_ref().map(|q| q.pending.clone()).unwrap_or_default());
                            if pending.is_empty() {
                                let text = if loading.get() { "Loading..." } else { "Nothing waiting for approval" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                            {text}
                                        </TableCell>
                                    </TableRow>
                                }.into_any();
                            }
                            pending.into_iter().map(|kpi| {
                                let id = kpi.id;
                                let note = RwSignal::new(String::new());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <div class="approval__indicator">{kpi.indicator.clone()}</div>
                                            <div class="approval__objective">{kpi.objective.clone()}</div>
                                        </TableCell>
                                        <TableCell>{kpi.department.clone()}</TableCell>
                                        <TableCell>{status_badge(kpi.status)}</TableCell>
                                        <TableCell>{format_money(kpi.budget, "GHS")}</TableCell>
                                        <TableCell>
                                            <input
                                                class="form__input"
                                                type="text"
                                                placeholder="Required to reject"
                                                prop:value=move || note.get()
                                                on:input=move |ev| note.set(event_target_value(&ev))
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <div class="approval__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    size=ButtonSize::Small
                                                    on_click=move |_| decide(id, ApprovalDecision::Approve, note.get_untracked())
                                                >
                                                    {icon("check")}
                                                    " Approve"
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    size=ButtonSize::Small
                                                    on_click=move |_| decide(id, ApprovalDecision::Reject, note.get_untracked())
                                                >
                                                    {icon("x")}
                                                    " Reject"
                                                </Button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <div class="panel">
                <h3 class="panel__title">"Recently Approved"</h3>
                {move || {
                    let recent = queue.with(|q| q.as_ref().map(|q| q.recently_approved.clone()).unwrap_or_default());
                    if recent.is_empty() {
                        return view! { <div class="panel__empty">"No approvals yet"</div> }.into_any();
                    }
                    view! {
                        <ul class="approval-list">
                            {recent.into_iter().map(|kpi| {
                                let line = decided_line(&kpi);
                                view! {
                                    <li class="approval-list__item">
                                        <span class="approval-list__icon">{icon("CompletedSolid")}</span>
                                        <div>
                                            <div class="approval__indicator">{kpi.indicator}</div>
                                            <div class="approval__objective">{format!("{} · {}", kpi.department, line)}</div>
                                        </div>
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

    #[test]
    fn test_reject_needs_a_reason() {
        assert!(decision_request(ApprovalDecision::Reject, "   ").is_err());
        let request = decision_request(ApprovalDecision::Reject, " Budget too high ").unwrap();
        assert_eq!(request.note, "Budget too high");
    }

    #[test]
    fn test_approve_without_note() {
        let request = decision_request(ApprovalDecision::Approve, "").unwrap();
        assert_eq!(request.decision, ApprovalDecision::Approve);
        assert!(request.note.is_empty());
    }
}
