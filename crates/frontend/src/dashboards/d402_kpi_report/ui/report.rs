use contracts::dashboards::d402_kpi_report::{KpiReport, ReportRequest};
use contracts::domain::a001_kpi::{KpiFilter, KpiStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_kpi_summary::api as summary_api;
use crate::dashboards::d402_kpi_report::api;
use crate::shared::components::filter_panel::KpiFilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::download_text;
use crate::shared::format::format_money;
use crate::shared::icons::icon;

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Report table as CSV, one line per department plus a header.
pub fn report_csv(report: &KpiReport) -> String {
    let mut out = String::from(
        "Department,KPIs,Achieved,Average Progress (%),Budget Allocated,Budget Utilized\n",
    );
    for row in &report.rows {
        out.push_str(&format!(
            "{},{},{},{},{:.2},{:.2}\n",
            csv_field(&row.department),
            row.kpi_count,
            row.achieved,
            row.average_progress,
            row.budget_allocated,
            row.budget_utilized,
        ));
    }
    out
}

fn report_filename(report: &KpiReport) -> String {
    format!("kpi_report_{}.csv", report.generated_at.format("%Y%m%d_%H%M"))
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    // Reports only filter by department and year.
    let filter = RwSignal::new(KpiFilter::default());
    let years = RwSignal::new(Vec::<i32>::new());
    let report = RwSignal::new(None::<KpiReport>);
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match summary_api::fetch_summary(&KpiFilter::default()).await {
                Ok(response) => years.set(response.years),
                Err(e) => log::error!("Failed to load report years: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        let request = filter.with(|f| ReportRequest {
            department: f.department.clone(),
            year: f.year.clone(),
        });
        loading.set(true);
        spawn_local(async move {
            match api::fetch_report(&request).await {
                Ok(data) => {
                    report.set(Some(data));
                    error_msg.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load report: {}", e);
                    error_msg.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let export = move |_| {
        report.with_untracked(|r| {
            if let Some(r) = r {
                if let Err(e) = download_text(&report_csv(r), &report_filename(r), "text/csv") {
                    error_msg.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="page page--reports">
            <PageHeader title="Reports & Analytics" subtitle="Progress and budget per department">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=export
                    disabled=Signal::derive(move || report.with(|r| r.is_none()))
                >
                    {icon("download")}
                    " Export CSV"
                </Button>
            </PageHeader>

            <KpiFilterPanel filter=filter years=years hide_status=true hide_search=true />

            {move || error_msg.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            {move || {
                if loading.get() && report.with(|r| r.is_none()) {
                    return view! { <Flex justify=FlexJustify::Center><Spinner /></Flex> }.into_any();
                }
                match report.get() {
                    Some(r) => view! { <ReportBody report=r /> }.into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ReportBody(report: KpiReport) -> impl IntoView {
    let generated = report.generated_at.format("%Y-%m-%d %H:%M UTC").to_string();
    let counts = report.counts;

    view! {
        <div class="panel">
            <h3 class="panel__title">{report.title.clone()}</h3>
            <div class="report-meta">
                <span>"Generated: " {generated}</span>
                <span>"Total KPIs: " {counts.total}</span>
                <span>"Average progress: " {format!("{}%", report.average_progress)}</span>
            </div>
            <div class="status-distribution">
                {KpiStatus::ALL.into_iter().map(|status| view! {
                    <div class=format!("status-distribution__item status--{}", status.css_modifier())>
                        <span class="status-distribution__label">{status.label()}</span>
                        <span class="status-distribution__count">{counts.get(status)}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>

        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Department"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 90px;">"KPIs"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 100px;">"Achieved"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 140px;">"Avg. Progress"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 180px;">"Budget Allocated"</TableHeaderCell>
                    <TableHeaderCell attr:style="width: 180px;">"Budget Utilized"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {if report.rows.is_empty() {
                    view! {
                        <TableRow>
                            <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                "No KPIs match the selected filters"
                            </TableCell>
                        </TableRow>
                    }.into_any()
                } else {
                    report.rows.into_iter().map(|row| view! {
                        <TableRow>
                            <TableCell>{row.department}</TableCell>
                            <TableCell>{row.kpi_count}</TableCell>
                            <TableCell>{row.achieved}</TableCell>
                            <TableCell>{format!("{}%", row.average_progress)}</TableCell>
                            <TableCell>{format_money(row.budget_allocated, "GHS")}</TableCell>
                            <TableCell>{format_money(row.budget_utilized, "GHS")}</TableCell>
                        </TableRow>
                    }).collect_view().into_any()
                }}
            </TableBody>
        </Table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::dashboards::d402_kpi_report::ReportRow;

    #[test]
    fn test_report_csv() {
        let report = KpiReport {
            title: "KPI Progress Report for All Departments (All Years)".into(),
            generated_at: chrono::Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
            counts: Default::default(),
            average_progress: 50,
            rows: vec![ReportRow {
                department: "Research, Innovation".into(),
                kpi_count: 2,
                achieved: 1,
                average_progress: 50,
                budget_allocated: 1500.0,
                budget_utilized: 750.5,
            }],
        };
        let csv = report_csv(&report);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\"Research, Innovation\",2,1,50,1500.00,750.50");
        assert_eq!(report_filename(&report), "kpi_report_20250301_0930.csv");
    }
}
