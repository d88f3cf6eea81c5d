use crate::shared::format::format_value;
use crate::shared::icons::icon;
use contracts::shared::indicators::{ChangeKind, StatsDatum};
use leptos::prelude::*;

#[component]
pub fn StatCard(datum: StatsDatum) -> impl IntoView {
    let icon_class = format!("stat-card__icon {}", datum.icon_colour.css_class());
    let change_class = match datum.change.kind {
        ChangeKind::Positive => "stat-card__change stat-card__change--up",
        ChangeKind::Negative => "stat-card__change stat-card__change--down",
        ChangeKind::Neutral => "stat-card__change stat-card__change--flat",
    };

    view! {
        <div class="stat-card">
            <div class=icon_class>
                {icon(&datum.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{datum.label.clone()}</div>
                <div class="stat-card__value">{format_value(datum.value, &datum.format)}</div>
                <div class=change_class>
                    {icon(&datum.change.icon)}
                    <span>{datum.change.description.clone()}</span>
                </div>
            </div>
        </div>
    }
}

/// Grid of stat cards, re-rendered whenever `cards` changes.
#[component]
pub fn StatCards(#[prop(into)] cards: Signal<Vec<StatsDatum>>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            {move || cards.get().into_iter().map(|datum| view! { <StatCard datum=datum /> }).collect_view()}
        </div>
    }
}
