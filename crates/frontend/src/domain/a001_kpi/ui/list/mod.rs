use contracts::dashboards::d400_kpi_summary::KpiDashboardResponse;
use contracts::domain::a001_kpi::{Kpi, KpiFilter, KpiId, KpiStatus};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

use crate::dashboards::d400_kpi_summary::api as summary_api;
use crate::domain::a001_kpi::api;
use crate::domain::a001_kpi::ui::details::KpiDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::KpiFilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCards;
use crate::shared::export::download_text;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

pub fn status_badge(status: KpiStatus) -> AnyView {
    let color = match status {
        KpiStatus::Achieved => BadgeColor::Success,
        KpiStatus::Ongoing => BadgeColor::Brand,
        KpiStatus::AtRisk => BadgeColor::Warning,
        KpiStatus::Missed => BadgeColor::Danger,
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge> }.into_any()
}

#[component]
pub fn KpiList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let filter = RwSignal::new(KpiFilter::default());
    let items = RwSignal::new(Vec::<Kpi>::new());
    let summary = RwSignal::new(None::<KpiDashboardResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<KpiId>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        let current = filter.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_kpis(&current).await {
                Ok(kpis) => {
                    items.set(kpis);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch KPIs: {}", e);
                    error.set(Some(e));
                }
            }
            match summary_api::fetch_summary(&current).await {
                Ok(response) => summary.set(Some(response)),
                Err(e) => log::error!("Failed to fetch KPI summary: {}", e),
            }
            loading.set(false);
        });
    });

    let years = Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.years.clone()).unwrap_or_default()));
    let cards = Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.cards.clone()).unwrap_or_default()));

    let delete_kpi = move |id: KpiId| {
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => error.set(Some(format!("Failed to delete KPI {}: {}", id, e))),
            }
        });
    };

    let export = move |_| {
        let current = filter.get_untracked();
        spawn_local(async move {
            let result = match api::export_csv(&current).await {
                Ok(csv) => download_text(&csv, "kpis.csv", "text/csv"),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error.set(Some(format!("Export failed: {}", e)));
            }
        });
    };

    view! {
        <div class="page page--kpi-list">
            <PageHeader title="All KPIs" subtitle="Every indicator tracked across departments">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate("/kpis/kpi-create")>
                    {icon("plus")}
                    " New KPI"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate("/kpis/batch-upload")>
                    {icon("BulkUpload")}
                    " Batch Upload"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " Export"
                </Button>
            </PageHeader>

            <KpiFilterPanel filter=filter years=years />

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <StatCards cards=cards />

            {move || editing.get().map(|id| {
                let on_saved: Rc<dyn Fn(KpiId)> = Rc::new(move |_| {
                    editing.set(None);
                    reload.update(|n| *n += 1);
                });
                let on_cancel: Rc<dyn Fn()> = Rc::new(move || editing.set(None));
                view! {
                    <div class="panel">
                        <KpiDetails id=Some(id) on_saved=on_saved on_cancel=on_cancel />
                    </div>
                }
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Indicator"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px;">"Department"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Target"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Status"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 100px;">"Progress"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 150px;">"Budget"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 200px;">"Timeline"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 100px; text-align: center;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() && items.with(|i| i.is_empty()) {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="8" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        let kpis = items.get();
                        if kpis.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="8" attr:style="padding: 40px; text-align: center;">
                                        "No KPIs match the selected filters"
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        kpis.into_iter().map(|kpi| {
                            let id = kpi.id;
                            view! {
                                <TableRow on:dblclick=move |_| editing.set(Some(id)) attr:style="cursor: pointer;">
                                    <TableCell>
                                        <div class="kpi-cell">
                                            <div class="kpi-cell__title">{kpi.indicator}</div>
                                            <div class="kpi-cell__subtitle">{kpi.objective}</div>
                                        </div>
                                    </TableCell>
                                    <TableCell>{kpi.department}</TableCell>
                                    <TableCell>{kpi.target}</TableCell>
                                    <TableCell>{status_badge(kpi.status)}</TableCell>
                                    <TableCell>{format!("{}%", kpi.progress)}</TableCell>
                                    <TableCell>{format_money(kpi.budget, "GHS")}</TableCell>
                                    <TableCell>{format!("{} to {}", kpi.timeline_start, kpi.timeline_end)}</TableCell>
                                    <TableCell>
                                        <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Transparent
                                                on_click=move |e: ev::MouseEvent| {
                                                    e.stop_propagation();
                                                    editing.set(Some(id));
                                                }
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Transparent
                                                on_click=move |e: ev::MouseEvent| {
                                                    e.stop_propagation();
                                                    delete_kpi(id);
                                                }
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </Flex>
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
