//! TopHeader component - application top navigation bar.
//!
//! Holds the sidebar toggle, the page title, the notifications bell, the
//! current role and the "switch role" action.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::role::use_role;
use contracts::system::navigation::{screen_for_path, screen_title};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role_ctx = use_role();

    let is_sidebar_visible = move || ctx.left_open.get();
    let role_label = move || {
        role_ctx
            .role()
            .map(|r| r.label().to_string())
            .or_else(|| role_ctx.tag())
            .unwrap_or_default()
    };
    let page_title = move || ctx.path.with(|p| screen_title(screen_for_path(p)));

    let switch_role = move |_| {
        role_ctx.switch();
        ctx.navigate("/");
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"PMS Dashboard"</span>
                <span class="top-header__page">{page_title}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.navigate("/notifications")
                    title="Notifications"
                >
                    {icon("bell")}
                </button>

                <div class="top-header__user">
                    {icon("Group")}
                    <span>{role_label}</span>
                </div>

                <button class="top-header__icon-btn" on:click=switch_role title="Switch role">
                    {icon("log-out")}
                    <span>"Switch role"</span>
                </button>
            </div>
        </div>
    }
}
