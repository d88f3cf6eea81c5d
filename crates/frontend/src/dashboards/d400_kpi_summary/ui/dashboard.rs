use contracts::dashboards::d400_kpi_summary::{KpiDashboardResponse, KpiSummary};
use contracts::domain::a001_kpi::{KpiFilter, KpiStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_kpi_summary::api;
use crate::shared::components::filter_panel::KpiFilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCards;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

#[component]
fn StatusDistribution(summary: KpiSummary) -> impl IntoView {
    view! {
        <div class="panel">
            <h3 class="panel__title">"Status Distribution"</h3>
            <div class="status-distribution">
                {KpiStatus::ALL.into_iter().map(|status| {
                    let count = summary.counts.get(status);
                    let share = summary.counts.share(status);
                    view! {
                        <div class=format!("status-distribution__item status--{}", status.css_modifier())>
                            <span class="status-distribution__label">{status.label()}</span>
                            <span class="status-distribution__count">{count}</span>
                            <span class="status-distribution__share">{format!("{}%", share)}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DepartmentPanels(summary: KpiSummary) -> impl IntoView {
    view! {
        <div class="panel-grid">
            <div class="panel">
                <h3 class="panel__title">"Average Progress by Department"</h3>
                {summary.departments.into_iter().map(|d| view! {
                    <ProgressBar
                        label=format!("{} ({} KPIs)", d.department, d.kpi_count)
                        percent=d.average_progress as f64
                        colour=d.colour
                    />
                }).collect_view()}
            </div>
            <div class="panel">
                <h3 class="panel__title">"Budget Utilization"</h3>
                {summary.budgets.into_iter().map(|b| {
                    let caption = format!(
                        "{}% of {}",
                        b.utilization,
                        format_money(b.budget_total, "GHS")
                    );
                    view! {
                        <ProgressBar
                            label=b.department
                            percent=b.utilization as f64
                            colour=b.colour
                            caption=caption
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// KPI dashboard: filters, stat cards, status mix and per-department bars.
#[component]
pub fn KpiDashboard() -> impl IntoView {
    let filter = RwSignal::new(KpiFilter::default());
    let data = RwSignal::new(None::<KpiDashboardResponse>);
    let years = RwSignal::new(Vec::<i32>::new());
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        let current = filter.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_summary(&current).await {
                Ok(response) => {
                    years.set(response.years.clone());
                    data.set(Some(response));
                    error_msg.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load KPI summary: {}", e);
                    error_msg.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let cards = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.cards.clone()).unwrap_or_default())
    });

    view! {
        <div class="page page--dashboard">
            <PageHeader title="KPI Dashboard" subtitle="Organisation-wide KPI performance">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.update(|n| *n += 1)
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <KpiFilterPanel filter=filter years=years />

            {move || error_msg.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show when=move || loading.get() && data.with(|d| d.is_none())>
                <Spinner />
            </Show>

            <StatCards cards=cards />

            {move || data.get().map(|d| view! {
                <StatusDistribution summary=d.summary.clone() />
                <DepartmentPanels summary=d.summary />
            })}
        </div>
    }
}
