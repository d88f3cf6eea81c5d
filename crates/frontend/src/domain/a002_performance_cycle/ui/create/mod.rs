use chrono::NaiveDate;
use contracts::domain::a002_performance_cycle::{CycleType, PerformanceCycleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_performance_cycle::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::select::LabeledSelect;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleForm {
    pub name: String,
    pub cycle_type: CycleType,
    pub start_date: String,
    pub end_date: String,
    pub participants: String,
}

impl CycleForm {
    /// Parses the raw inputs into a request body.
    pub fn to_dto(&self) -> Result<PerformanceCycleDto, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Cycle name must not be empty".into());
        }
        let parse = |label: &str, value: &str| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
        };
        let start_date = parse("Start date", &self.start_date)?;
        let end_date = parse("End date", &self.end_date)?;
        if start_date > end_date {
            return Err("Start date must not be after end date".into());
        }
        let participants = match self.participants.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| "Participants must be a whole number".to_string())?,
            ),
        };
        Ok(PerformanceCycleDto {
            name: name.to_string(),
            cycle_type: self.cycle_type,
            start_date,
            end_date,
            participants,
        })
    }
}

#[component]
pub fn CreatePerformanceCycle() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let form = RwSignal::new(CycleForm::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let dto = match form.with_untracked(|f| f.to_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(id) => {
                    log::info!("Performance cycle {} created", id);
                    ctx.navigate("/performance-cycles");
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let type_options = Signal::derive(|| {
        CycleType::ALL
            .iter()
            .map(|t| (t.label().to_string(), t.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title="Create Performance Cycle" subtitle="New cycles start as drafts">
                {()}
            </PageHeader>

            <div class="details-container">
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}

                <div class="details-form form-grid">
                    <div class="form__group">
                        <label class="form__label">"Name"</label>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Q3 2025 Review"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <LabeledSelect
                        label="Type"
                        value=Signal::derive(move || form.with(|f| f.cycle_type.label().to_string()))
                        options=type_options
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.cycle_type = CycleType::from_label(&v).unwrap_or_default())
                        })
                    />
                    <div class="form__group">
                        <label class="form__label">"Start date"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || form.with(|f| f.start_date.clone())
                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"End date"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || form.with(|f| f.end_date.clone())
                            on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Participants"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.participants.clone())
                            on:input=move |ev| form.update(|f| f.participants = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                        "Create Cycle"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.navigate("/performance-cycles")
                    >
                        "Cancel"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CycleForm {
        CycleForm {
            name: " Q3 Review ".into(),
            cycle_type: CycleType::Quarterly,
            start_date: "2025-07-01".into(),
            end_date: "2025-09-30".into(),
            participants: "25".into(),
        }
    }

    #[test]
    fn test_form_to_dto() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "Q3 Review");
        assert_eq!(dto.participants, Some(25));
        assert_eq!(dto.start_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    }

    #[test]
    fn test_form_rejects_bad_input() {
        let blank = CycleForm { participants: String::new(), ..filled() };
        assert_eq!(blank.to_dto().unwrap().participants, None);

        let reversed = CycleForm { end_date: "2025-06-30".into(), ..filled() };
        assert!(reversed.to_dto().is_err());

        let bad_date = CycleForm { start_date: "July".into(), ..filled() };
        assert!(bad_date.to_dto().is_err());

        let unnamed = CycleForm { name: "  ".into(), ..filled() };
        assert!(unnamed.to_dto().is_err());
    }
}
