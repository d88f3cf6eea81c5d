use contracts::system::navigation::Role;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::role::use_role;

fn role_description(role: Role) -> &'static str {
    match role {
        Role::Admin => "Manage KPIs, cycles, users and departments",
        Role::Hod => "Track and approve your department's KPIs",
        Role::User => "Follow your own objectives and feedback",
        Role::Bde => "Business development KPIs and approvals",
        Role::Auditor => "Review the audit trail and compliance",
    }
}

/// Role selection page. Choosing a role stores it and opens its landing page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let role_ctx = use_role();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Performance Management"</h1>
                <h2>"Select your role"</h2>

                <div class="login-roles">
                    {Role::ALL.into_iter().map(|role| {
                        view! {
                            <button
                                class="login-role"
                                on:click=move |_| {
                                    role_ctx.select(role);
                                    ctx.navigate(role.landing_route());
                                }
                            >
                                {icon("Group")}
                                <span class="login-role__label">{role.label()}</span>
                                <span class="login-role__hint">{role_description(role)}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
