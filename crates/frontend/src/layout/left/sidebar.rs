//! Sidebar built from the navigation resolved for the current role

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::role::use_role;
use contracts::system::navigation::NavSection;
use leptos::prelude::*;

#[component]
fn SidebarSection(section: NavSection) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded = RwSignal::new(true);

    view! {
        <div class="app-sidebar__section">
            <div
                class="app-sidebar__section-title"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                <span>{section.title}</span>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=move || expanded.get()
                >
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=move || expanded.get()>
                <div class="app-sidebar__children">
                    {section.items.iter().map(|item| {
                        let route = item.route;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    ctx.path.with(|p| p.eq_ignore_ascii_case(route))
                                }
                                on:click=move |_| ctx.navigate(route)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let role_ctx = use_role();

    view! {
        <div class="app-sidebar__content">
            {move || {
                let navigation = role_ctx.navigation();
                if navigation.sections.is_empty() {
                    return view! {
                        <div class="app-sidebar__empty">"No menu for this role"</div>
                    }.into_any();
                }
                navigation
                    .sections
                    .into_iter()
                    .map(|section| view! { <SidebarSection section=section /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
