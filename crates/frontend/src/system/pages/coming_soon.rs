use leptos::prelude::*;

use crate::shared::icons::icon;

/// Placeholder for menu entries that have no screen yet.
#[component]
pub fn ComingSoon(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class="page page--coming-soon">
            <div class="coming-soon">
                {icon("Clock")}
                <h1>"Coming Soon"</h1>
                <p>"This page is under construction."</p>
                <code>{path}</code>
            </div>
        </div>
    }
}
