use contracts::dashboards::d401_role_dashboard::RoleDashboard;
use contracts::system::navigation::{self, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d401_role_dashboard::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCards;
use crate::shared::icons::icon;

/// Landing page of a role: its stat cards plus shortcuts into its menu.
#[component]
pub fn RoleDashboardPage(role: Role) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let data = RwSignal::new(None::<RoleDashboard>);
    let error_msg = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_dashboard(role).await {
                Ok(dashboard) => data.set(Some(dashboard)),
                Err(e) => {
                    log::error!("Failed to load {} dashboard: {}", role.as_str(), e);
                    error_msg.set(Some(e));
                }
            }
        });
    });

    let title = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.title.clone()))
            .unwrap_or_else(|| format!("{} Dashboard", role.label()))
    });
    let cards = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.cards.clone()).unwrap_or_default())
    });

    // Shortcuts skip the landing route itself.
    let shortcuts: Vec<_> = navigation::resolve(role.as_str())
        .items()
        .copied()
        .filter(|item| item.route != role.landing_route())
        .collect();

    view! {
        <div class="page page--dashboard">
            {move || view! {
                <PageHeader
                    title=title.get()
                    subtitle=data.with(|d| d.as_ref().map(|d| d.subtitle.clone()))
                >
                    {()}
                </PageHeader>
            }}

            {move || error_msg.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || data.with(|d| d.is_some())
                fallback=move || view! {
                    <Show when=move || error_msg.with(|e| e.is_none())>
                        <Flex justify=FlexJustify::Center><Spinner /></Flex>
                    </Show>
                }
            >
                <StatCards cards=cards />
            </Show>

            <div class="panel">
                <h3 class="panel__title">"Quick Actions"</h3>
                <div class="quick-actions">
                    {shortcuts.into_iter().map(|item| {
                        let route = item.route;
                        view! {
                            <button
                                class="quick-action"
                                on:click=move |_| ctx.navigate(route)
                            >
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
