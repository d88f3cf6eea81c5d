use contracts::dashboards::d403_cycle_summary::CycleDashboardResponse;
use contracts::domain::a002_performance_cycle::{CycleId, CycleStatus, PerformanceCycle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d403_cycle_summary::api as summary_api;
use crate::domain::a002_performance_cycle::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCards;
use crate::shared::icons::icon;
use contracts::shared::indicators::PROGRESS_HEALTH;

fn status_badge(status: CycleStatus) -> AnyView {
    let color = match status {
        CycleStatus::Draft => BadgeColor::Informative,
        CycleStatus::Active => BadgeColor::Brand,
        CycleStatus::Completed => BadgeColor::Success,
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge> }.into_any()
}

/// Label of the button that moves a cycle forward, `None` once completed.
pub fn advance_label(status: CycleStatus) -> Option<&'static str> {
    match status.next()? {
        CycleStatus::Active => Some("Launch"),
        CycleStatus::Completed => Some("Complete"),
        CycleStatus::Draft => None,
    }
}

#[component]
pub fn PerformanceCycleList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let items = RwSignal::new(Vec::<PerformanceCycle>::new());
    let summary = RwSignal::new(None::<CycleDashboardResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_cycles().await {
                Ok(cycles) => items.set(cycles),
                Err(e) => {
                    log::error!("Failed to fetch performance cycles: {}", e);
                    error.set(Some(e));
                }
            }
            match summary_api::fetch_summary().await {
                Ok(response) => summary.set(Some(response)),
                Err(e) => log::error!("Failed to fetch cycle summary: {}", e),
            }
            loading.set(false);
        });
    });

    let advance = move |id: CycleId| {
        spawn_local(async move {
            match api::advance(id).await {
                Ok(cycle) => {
                    log::info!("Cycle {} moved to {}", id, cycle.status.label());
                    error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(format!("Cannot advance cycle {}: {}", id, e))),
            }
        });
    };

    let cards = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|s| s.cards.clone()).unwrap_or_default())
    });

    view! {
        <div class="page page--cycles">
            <PageHeader title="Performance Cycles" subtitle="Review periods and their completion">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate("/performance-cycles/create")
                >
                    {icon("plus")}
                    " New Cycle"
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

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <StatCards cards=cards />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Type"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 220px;">"Period"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Status"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Participants"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 200px;">"Completion"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px; text-align: center;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let cycles = items.get();
                        if cycles.is_empty() {
                            let text = if loading.get() { "Loading..." } else { "No performance cycles yet" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7" attr:style="padding: 40px; text-align: center;">
                                        {text}
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        cycles.into_iter().map(|cycle| {
                            let id = cycle.id;
                            let period = format!(
                                "{} to {}",
                                cycle.start_date.format("%Y-%m-%d"),
                                cycle.end_date.format("%Y-%m-%d")
                            );
                            let progress = cycle.progress as f64;
                            view! {
                                <TableRow>
                                    <TableCell>{cycle.name}</TableCell>
                                    <TableCell>{cycle.cycle_type.label()}</TableCell>
                                    <TableCell>{period}</TableCell>
                                    <TableCell>{status_badge(cycle.status)}</TableCell>
                                    <TableCell>{cycle.participants}</TableCell>
                                    <TableCell>
                                        <ProgressBar
                                            label=""
                                            percent=progress
                                            colour=PROGRESS_HEALTH.colour(progress)
                                        />
                                    </TableCell>
                                    <TableCell>
                                        {advance_label(cycle.status).map(|label| view! {
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                size=ButtonSize::Small
                                                on_click=move |_| advance(id)
                                            >
                                                {icon("next")}
                                                {format!(" {}", label)}
                                            </Button>
                                        })}
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_label_follows_ladder() {
        assert_eq!(advance_label(CycleStatus::Draft), Some("Launch"));
        assert_eq!(advance_label(CycleStatus::Active), Some("Complete"));
        assert_eq!(advance_label(CycleStatus::Completed), None);
    }
}
