use contracts::domain::a001_kpi::aggregate::DEPARTMENTS;
use contracts::domain::a001_kpi::{Frequency, KpiDto, KpiId, KpiStatus};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use super::view_model::KpiDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::select::LabeledSelect;

fn labels<I: IntoIterator<Item = &'static str>>(values: I) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[component]
fn FormText(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {if multiline {
                view! {
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    ></textarea>
                }.into_any()
            } else {
                view! {
                    <input
                        class="form__input"
                        type=input_type.unwrap_or("text")
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                }.into_any()
            }}
        </div>
    }
}

/// Field accessor pair for one string column of the form.
fn text_binding(
    vm: KpiDetailsViewModel,
    get: fn(&KpiDto) -> String,
    set: fn(&mut KpiDto, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || vm.form.with(get)),
        Callback::new(move |v: String| vm.form.update(|f| set(f, v))),
    )
}

#[component]
pub fn KpiDetails(
    id: Option<KpiId>,
    on_saved: Rc<dyn Fn(KpiId)>,
    #[prop(optional)] on_cancel: Option<Rc<dyn Fn()>>,
) -> impl IntoView {
    let vm = KpiDetailsViewModel::new();
    vm.load_if_needed(id);

    let (indicator, set_indicator) =
        text_binding(vm, |f| f.indicator.clone(), |f, v| f.indicator = v);
    let (objective, set_objective) =
        text_binding(vm, |f| f.objective.clone(), |f, v| f.objective = v);
    let (target, set_target) = text_binding(vm, |f| f.target.clone(), |f, v| f.target = v);
    let (baseline, set_baseline) = text_binding(
        vm,
        |f| f.baseline.clone().unwrap_or_default(),
        |f, v| f.baseline = Some(v),
    );
    let (activities, set_activities) = text_binding(
        vm,
        |f| f.activities.clone().unwrap_or_default(),
        |f, v| f.activities = Some(v),
    );
    let (verification, set_verification) = text_binding(
        vm,
        |f| f.verification.clone().unwrap_or_default(),
        |f, v| f.verification = Some(v),
    );
    let (comments, set_comments) = text_binding(
        vm,
        |f| f.comments.clone().unwrap_or_default(),
        |f, v| f.comments = Some(v),
    );
    let (start, set_start) = text_binding(
        vm,
        |f| f.timeline_start.clone(),
        |f, v| f.timeline_start = v,
    );
    let (end, set_end) = text_binding(vm, |f| f.timeline_end.clone(), |f, v| f.timeline_end = v);
    let (progress, set_progress) = text_binding(
        vm,
        |f| f.progress.map(|p| p.to_string()).unwrap_or_default(),
        |f, v| f.progress = v.trim().parse().ok(),
    );
    let (budget, set_budget) = text_binding(
        vm,
        |f| f.budget.map(|b| b.to_string()).unwrap_or_default(),
        |f, v| f.budget = v.trim().parse().ok(),
    );

    let department = Signal::derive(move || vm.form.with(|f| f.department.clone()));
    let status = Signal::derive(move || {
        vm.form.with(|f| f.status.unwrap_or_default().label().to_string())
    });
    let frequency = Signal::derive(move || {
        vm.form.with(|f| f.frequency.unwrap_or_default().label().to_string())
    });

    // thaw callbacks must be Send
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);
    let save = move |_| on_saved.with_value(|cb| vm.save_command(cb.clone()));
    let cancel = move |_| {
        on_cancel.with_value(|cb| match cb {
            Some(cb) => cb(),
            None => vm.reset(),
        })
    };

    view! {
        <div class="details-container kpi-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit KPI" } else { "New KPI" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="details-form form-grid">
                <FormText label="Indicator" value=indicator on_input=set_indicator />
                <LabeledSelect
                    label="Department"
                    value=department
                    options=Signal::derive(|| labels(DEPARTMENTS))
                    on_change=Callback::new(move |v: String| vm.form.update(|f| f.department = v))
                />
                <FormText label="Objective" value=objective on_input=set_objective multiline=true />
                <FormText label="Target" value=target on_input=set_target />
                <FormText label="Baseline" value=baseline on_input=set_baseline />
                <LabeledSelect
                    label="Status"
                    value=status
                    options=Signal::derive(|| labels(KpiStatus::ALL.iter().map(|s| s.label())))
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.status = KpiStatus::from_label(&v))
                    })
                />
                <FormText label="Progress (%)" value=progress on_input=set_progress input_type="number" />
                <FormText label="Budget (GHS)" value=budget on_input=set_budget input_type="number" />
                <LabeledSelect
                    label="Frequency"
                    value=frequency
                    options=Signal::derive(|| labels(Frequency::ALL.iter().map(|f| f.label())))
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.frequency = Frequency::from_label(&v))
                    })
                />
                <FormText label="Timeline Start" value=start on_input=set_start input_type="date" />
                <FormText label="Timeline End" value=end on_input=set_end input_type="date" />
                <FormText label="Activities" value=activities on_input=set_activities multiline=true />
                <FormText label="Means of Verification" value=verification on_input=set_verification multiline=true />
                <FormText label="Comments" value=comments on_input=set_comments multiline=true />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=vm.saving
                >
                    {move || if vm.is_edit_mode() { "Save Changes" } else { "Create KPI" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn CreateKpiPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let on_saved: Rc<dyn Fn(KpiId)> = Rc::new(move |id| {
        log::info!("KPI {} created", id);
        ctx.navigate("/all-kpis");
    });

    view! {
        <div class="page">
            <PageHeader title="Create KPI" subtitle="Define a new key performance indicator">
                {()}
            </PageHeader>
            <KpiDetails id=None on_saved=on_saved />
        </div>
    }
}
