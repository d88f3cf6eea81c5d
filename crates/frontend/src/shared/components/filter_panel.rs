use crate::shared::components::select::{options_with_wildcard, LabeledSelect};
use contracts::domain::a001_kpi::aggregate::DEPARTMENTS;
use contracts::domain::a001_kpi::{KpiFilter, KpiStatus};
use leptos::prelude::*;

pub const ALL_DEPARTMENTS: &str = "All Departments";
pub const ALL_STATUSES: &str = "All Statuses";
pub const ALL_YEARS: &str = "All Years";

/// Collapsible KPI filter bar bound to a shared [`KpiFilter`] signal.
///
/// Selecting a wildcard entry stores it as-is; the filter itself treats
/// "All ..." values as absent.
#[component]
pub fn KpiFilterPanel(
    filter: RwSignal<KpiFilter>,
    /// Start years present in the data, newest first
    #[prop(into)]
    years: Signal<Vec<i32>>,
    /// Hide the status select (reports only filter by department and year)
    #[prop(optional)]
    hide_status: bool,
    /// Hide the free-text search box
    #[prop(optional)]
    hide_search: bool,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);

    let department = Signal::derive(move || {
        filter.with(|f| f.department.clone().unwrap_or_else(|| ALL_DEPARTMENTS.into()))
    });
    let status = Signal::derive(move || {
        filter.with(|f| f.status.clone().unwrap_or_else(|| ALL_STATUSES.into()))
    });
    let year = Signal::derive(move || {
        filter.with(|f| f.year.clone().unwrap_or_else(|| ALL_YEARS.into()))
    });

    let department_options = Signal::derive(|| options_with_wildcard(ALL_DEPARTMENTS, DEPARTMENTS));
    let status_options =
        Signal::derive(|| options_with_wildcard(ALL_STATUSES, KpiStatus::ALL.iter().map(|s| s.label())));
    let year_options = Signal::derive(move || {
        options_with_wildcard(ALL_YEARS, years.get().into_iter().map(|y| y.to_string()))
    });

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = filter.with(|f| f.active_count());
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <button
                    class="button button--secondary"
                    on:click=move |_| filter.set(KpiFilter::default())
                >
                    "Clear"
                </button>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    <LabeledSelect
                        label="Department"
                        value=department
                        options=department_options
                        on_change=Callback::new(move |v: String| filter.update(|f| f.department = Some(v)))
                    />
                    {(!hide_status).then(|| view! {
                        <LabeledSelect
                            label="Status"
                            value=status
                            options=status_options
                            on_change=Callback::new(move |v: String| filter.update(|f| f.status = Some(v)))
                        />
                    })}
                    <LabeledSelect
                        label="Year"
                        value=year
                        options=year_options
                        on_change=Callback::new(move |v: String| filter.update(|f| f.year = Some(v)))
                    />
                    {(!hide_search).then(|| view! {
                        <div class="form__group">
                            <label class="form__label">"Search"</label>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Indicator or objective"
                                prop:value=move || filter.with(|f| f.search.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    filter.update(|f| {
                                        f.search = if text.trim().is_empty() { None } else { Some(text) };
                                    });
                                }
                            />
                        </div>
                    })}
                </div>
            </Show>
        </div>
    }
}
