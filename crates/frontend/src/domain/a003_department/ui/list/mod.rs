use contracts::dashboards::d400_kpi_summary::budget_utilization;
use contracts::domain::a003_department::{Department, DepartmentId, DepartmentSummary};
use contracts::shared::indicators::BUDGET_UTILIZATION;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_department::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::format::{format_money, format_money_compact, format_thousands};
use crate::shared::icons::icon;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentForm {
    pub name: String,
    pub head: String,
    pub staff_count: String,
    pub budget_total: String,
    pub description: String,
}

impl DepartmentForm {
    pub fn to_department(&self) -> Result<Department, String> {
        let staff_count = self
            .staff_count
            .trim()
            .parse::<u32>()
            .map_err(|_| "Staff count must be a whole number".to_string())?;
        let budget_total = self
            .budget_total
            .trim()
            .parse::<f64>()
            .map_err(|_| "Budget must be a number".to_string())?;
        let department = Department {
            id: DepartmentId::default(),
            name: self.name.trim().to_string(),
            head: self.head.trim().to_string(),
            staff_count,
            budget_total,
            budget_utilized: 0.0,
            description: self.description.trim().to_string(),
        };
        department.validate()?;
        Ok(department)
    }
}

#[component]
fn SummaryTiles(summary: DepartmentSummary) -> impl IntoView {
    let tiles = [
        ("Departments", format_thousands(summary.departments as i64)),
        ("Total Staff", format_thousands(summary.total_staff as i64)),
        ("Total Budget", format_money_compact(summary.total_budget, "GHS")),
        ("Avg. Staff per Department", format_thousands(summary.average_staff as i64)),
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
pub fn DepartmentList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Department>::new());
    let summary = RwSignal::new(None::<DepartmentSummary>);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);
    let show_form = RwSignal::new(false);
    let form = RwSignal::new(DepartmentForm::default());

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            match api::fetch_departments().await {
                Ok(v) => items.set(v),
                Err(e) => {
                    log::error!("Failed to fetch departments: {}", e);
                    error.set(Some(e));
                }
            }
            match api::fetch_summary().await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => log::error!("Failed to fetch department summary: {}", e),
            }
        });
    });

    let save = move |_| {
        let department = match form.with_untracked(|f| f.to_department()) {
            Ok(d) => d,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        spawn_local(async move {
            match api::create(&department).await {
                Ok(_) => {
                    form.set(DepartmentForm::default());
                    show_form.set(false);
                    error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let text_input = move |label: &'static str, get: fn(&DepartmentForm) -> String, set: fn(&mut DepartmentForm, String)| {
        view! {
            <div class="form__group">
                <label class="form__label">{label}</label>
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="page page--departments">
            <PageHeader title="Department Management" subtitle="Staffing and budget envelopes">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.update(|v| *v = !*v)>
                    {icon("plus")}
                    " New Department"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            {move || summary.get().map(|s| view! { <SummaryTiles summary=s /> })}

            <Show when=move || show_form.get()>
                <div class="panel">
                    <div class="details-form form-grid">
                        {text_input("Name", |f| f.name.clone(), |f, v| f.name = v)}
                        {text_input("Head", |f| f.head.clone(), |f, v| f.head = v)}
                        {text_input("Staff count", |f| f.staff_count.clone(), |f, v| f.staff_count = v)}
                        {text_input("Budget (GHS)", |f| f.budget_total.clone(), |f, v| f.budget_total = v)}
                        {text_input("Description", |f| f.description.clone(), |f, v| f.description = v)}
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_form.set(false)>
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Department"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 180px;">"Head"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Staff"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 160px;">"Budget"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 220px;">"Utilization"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items.get().into_iter().map(|d| {
                        let utilization = budget_utilization(d.budget_total, d.budget_utilized) as f64;
                        let caption = format_money(d.budget_utilized, "GHS");
                        view! {
                            <TableRow>
                                <TableCell>
                                    <div class="kpi-cell">
                                        <div class="kpi-cell__title">{d.name}</div>
                                        <div class="kpi-cell__subtitle">{d.description}</div>
                                    </div>
                                </TableCell>
                                <TableCell>{d.head}</TableCell>
                                <TableCell>{d.staff_count}</TableCell>
                                <TableCell>{format_money(d.budget_total, "GHS")}</TableCell>
                                <TableCell>
                                    <ProgressBar
                                        label=format!("{:.0}%", utilization)
                                        percent=utilization
                                        colour=BUDGET_UTILIZATION.colour(utilization)
                                        caption=caption
                                    />
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_form() {
        let form = DepartmentForm {
            name: " Legal ".into(),
            head: "Esi Mensah".into(),
            staff_count: "4".into(),
            budget_total: "120000".into(),
            description: String::new(),
        };
        let department = form.to_department().unwrap();
        assert_eq!(department.name, "Legal");
        assert_eq!(department.staff_count, 4);
        assert_eq!(department.budget_utilized, 0.0);

        let missing_name = DepartmentForm { name: String::new(), ..form.clone() };
        assert!(missing_name.to_department().is_err());

        let bad_staff = DepartmentForm { staff_count: "four".into(), ..form };
        assert!(bad_staff.to_department().is_err());
    }
}
