use chrono::NaiveDate;
use contracts::dashboards::d405_goal_summary::GoalDashboardResponse;
use contracts::domain::a006_goal::{Goal, GoalDto, GoalPriority, GoalStatus, ALIGNMENTS, CATEGORIES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d405_goal_summary::api as summary_api;
use crate::domain::a006_goal::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::select::LabeledSelect;
use crate::shared::components::stat_card::StatCards;
use crate::shared::format::today;
use crate::shared::icons::icon;
use contracts::shared::indicators::PROGRESS_HEALTH;

fn status_badge(status: GoalStatus) -> AnyView {
    let color = match status {
        GoalStatus::NotStarted => BadgeColor::Informative,
        GoalStatus::InProgress => BadgeColor::Brand,
        GoalStatus::AtRisk => BadgeColor::Warning,
        GoalStatus::Completed => BadgeColor::Success,
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge> }.into_any()
}

/// "12 days left", "Due today" or "3 days overdue".
pub fn due_caption(days_left: i64) -> String {
    match days_left {
        0 => "Due today".to_string(),
        1 => "1 day left".to_string(),
        n if n > 1 => format!("{} days left", n),
        -1 => "1 day overdue".to_string(),
        n => format!("{} days overdue", -n),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: GoalPriority,
    pub category: String,
    pub alignment: String,
    /// One key result per line.
    pub key_results: String,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            priority: GoalPriority::default(),
            category: CATEGORIES[0].to_string(),
            alignment: ALIGNMENTS[0].to_string(),
            key_results: String::new(),
        }
    }
}

impl GoalForm {
    pub fn to_dto(&self) -> Result<GoalDto, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Goal title must not be empty".into());
        }
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d")
            .map_err(|_| "Due date must be a date (YYYY-MM-DD)".to_string())?;
        Ok(GoalDto {
            id: None,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_date,
            priority: self.priority,
            category: self.category.clone(),
            progress: None,
            status: None,
            key_results: self
                .key_results
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            alignment: self.alignment.clone(),
        })
    }
}

fn label_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[component]
pub fn GoalList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Goal>::new());
    let summary = RwSignal::new(None::<GoalDashboardResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);
    let form = RwSignal::new(GoalForm::default());
    let show_form = RwSignal::new(false);
    let today = today();

    Effect::new(move |_| {
        reload.track();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_goals().await {
                Ok(goals) => items.set(goals),
                Err(e) => {
                    log::error!("Failed to fetch goals: {}", e);
                    error.set(Some(e));
                }
            }
            match summary_api::fetch_summary().await {
                Ok(response) => summary.set(Some(response)),
                Err(e) => log::error!("Failed to fetch goal summary: {}", e),
            }
            loading.set(false);
        });
    });

    let save = move |dto: GoalDto| {
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(id) => {
                    log::info!("Goal {} saved", id);
                    error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(format!("Cannot save goal: {}", e))),
            }
        });
    };

    let create = move |_| match form.with_untracked(|f| f.to_dto()) {
        Ok(dto) => {
            save(dto);
            form.set(GoalForm::default());
            show_form.set(false);
        }
        Err(e) => error.set(Some(e)),
    };

    let cards = Signal::derive(move || {
        summary.with(|s| s.as_ref().map(|s| s.cards.clone()).unwrap_or_default())
    });

    view! {
        <div class="page page--goals">
            <PageHeader title="Goals & Objectives" subtitle="Personal goals and their key results">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_form.update(|s| *s = !*s)
                >
                    {icon("plus")}
                    " New Goal"
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

            <Show when=move || show_form.get()>
                <div class="panel">
                    <h3 class="panel__title">"New Goal"</h3>
                    <div class="form-grid">
                        <div class="form__group">
                            <label class="form__label">"Title"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Due date"</label>
                            <input
                                class="form__input"
                                type="date"
                                prop:value=move || form.with(|f| f.due_date.clone())
                                on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                            />
                        </div>
                        <LabeledSelect
                            label="Priority"
                            value=Signal::derive(move || form.with(|f| f.priority.label().to_string()))
                            options=Signal::derive(|| label_options(GoalPriority::ALL.iter().map(|p| p.label())))
                            on_change=Callback::new(move |v: String| {
                                form.update(|f| f.priority = GoalPriority::from_label(&v).unwrap_or_default())
                            })
                        />
                        <LabeledSelect
                            label="Category"
                            value=Signal::derive(move || form.with(|f| f.category.clone()))
                            options=Signal::derive(|| label_options(CATEGORIES))
                            on_change=Callback::new(move |v: String| form.update(|f| f.category = v))
                        />
                        <LabeledSelect
                            label="Alignment"
                            value=Signal::derive(move || form.with(|f| f.alignment.clone()))
                            options=Signal::derive(|| label_options(ALIGNMENTS))
                            on_change=Callback::new(move |v: String| form.update(|f| f.alignment = v))
                        />
                        <div class="form__group">
                            <label class="form__label">"Description"</label>
                            <textarea
                                class="form__textarea"
                                rows="2"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Key results (one per line)"</label>
                            <textarea
                                class="form__textarea"
                                rows="3"
                                prop:value=move || form.with(|f| f.key_results.clone())
                                on:input=move |ev| form.update(|f| f.key_results = event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=create>
                            "Create Goal"
                        </Button>
                    </div>
                </div>
            </Show>

            <div class="panel">
                <h3 class="panel__title">"Status Distribution"</h3>
                {move || summary.with(|s| s.as_ref().map(|s| {
                    let total = s.summary.total.max(1) as f64;
                    s.summary.by_status.iter().map(|entry| {
                        let percent = entry.count as f64 * 100.0 / total;
                        view! {
                            <ProgressBar
                                label=entry.status.label()
                                percent=percent
                                colour=PROGRESS_HEALTH.colour(percent)
                                caption=entry.count.to_string()
                            />
                        }
                    }).collect_view()
                }))}
            </div>

            <div class="goal-cards">
                {move || {
                    let goals = items.get();
                    if goals.is_empty() {
                        let text = if loading.get() { "Loading..." } else { "No goals yet" };
                        return view! { <div class="panel__empty">{text}</div> }.into_any();
                    }
                    goals.into_iter().map(|goal| {
                        let progress = goal.progress as f64;
                        let caption = due_caption(goal.days_left(today));
                        let complete = goal.is_active().then(|| {
                            let mut dto = GoalDto::from(&goal);
                            dto.status = Some(GoalStatus::Completed);
                            dto
                        });
                        view! {
                            <div class="goal-card">
                                <div class="goal-card__header">
                                    <div class="goal-card__title">{goal.title.clone()}</div>
                                    {status_badge(goal.status)}
                                </div>
                                <div class="goal-card__meta">
                                    {format!("{} · {} · {} priority", goal.category, goal.alignment, goal.priority.label())}
                                </div>
                                <div class="goal-card__description">{goal.description.clone()}</div>
                                <ProgressBar
                                    label="Progress"
                                    percent=progress
                                    colour=PROGRESS_HEALTH.colour(progress)
                                />
                                <ul class="goal-card__results">
                                    {goal.key_results.iter().map(|r| view! { <li>{r.clone()}</li> }).collect_view()}
                                </ul>
                                <div class="goal-card__footer">
                                    <span class="goal-card__due">{icon("Calendar")}" "{caption}</span>
                                    {complete.map(|dto| view! {
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            size=ButtonSize::Small
                                            on_click=move |_| save(dto.clone())
                                        >
                                            {icon("check")}
                                            " Mark complete"
                                        </Button>
                                    })}
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> GoalForm {
        GoalForm {
            title: " Ship the mentoring programme ".into(),
            due_date: "2025-12-15".into(),
            key_results: "Pair five juniors\n\n  Run two workshops ".into(),
            ..GoalForm::default()
        }
    }

    #[test]
    fn test_form_to_dto() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.title, "Ship the mentoring programme");
        assert_eq!(dto.key_results, vec!["Pair five juniors", "Run two workshops"]);
        assert_eq!(dto.category, "Technical");
        assert_eq!(dto.alignment, "Q1 Goal");
        assert_eq!(dto.id, None);
    }

    #[test]
    fn test_form_rejects_bad_input() {
        assert!(GoalForm { title: " ".into(), ..filled() }.to_dto().is_err());
        assert!(GoalForm { due_date: "December".into(), ..filled() }.to_dto().is_err());
    }

    #[test]
    fn test_due_caption() {
        assert_eq!(due_caption(12), "12 days left");
        assert_eq!(due_caption(1), "1 day left");
        assert_eq!(due_caption(0), "Due today");
        assert_eq!(due_caption(-3), "3 days overdue");
    }
}
