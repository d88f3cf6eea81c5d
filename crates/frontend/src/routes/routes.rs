use crate::dashboards::{ApprovalQueuePage, KpiDashboard, ReportsPage, RoleDashboardPage};
use crate::domain::a001_kpi::ui::{BatchKpiUpload, CreateKpiPage, KpiList};
use crate::domain::a002_performance_cycle::ui::{CreatePerformanceCycle, PerformanceCycleList};
use crate::domain::a003_department::ui::DepartmentList;
use crate::domain::a004_audit_entry::api::report_in_background;
use crate::domain::a004_audit_entry::ui::AuditTrail;
use crate::domain::a005_user::ui::UserList;
use crate::domain::a006_goal::ui::GoalList;
use crate::domain::a007_notification::ui::NotificationCenter;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::pages::coming_soon::ComingSoon;
use crate::system::pages::login::LoginPage;
use crate::system::role::{use_role, RoleContext};
use contracts::domain::a004_audit_entry::AuditAction;
use contracts::system::navigation::{normalize_path, screen_for_path, screen_title, Screen};
use leptos::prelude::*;

/// Component for a screen. `Home` shows the role's own dashboard.
fn render_screen(screen: Screen, path: String, role_ctx: RoleContext) -> AnyView {
    match screen {
        Screen::Home => match role_ctx.role_untracked() {
            Some(role) => view! { <RoleDashboardPage role=role /> }.into_any(),
            None => view! { <ComingSoon path=path /> }.into_any(),
        },
        Screen::RoleDashboard(role) => view! { <RoleDashboardPage role=role /> }.into_any(),
        Screen::KpiDashboard => view! { <KpiDashboard /> }.into_any(),
        Screen::AllKpis => view! { <KpiList /> }.into_any(),
        Screen::CreateKpi => view! { <CreateKpiPage /> }.into_any(),
        Screen::BatchKpiUpload => view! { <BatchKpiUpload /> }.into_any(),
        Screen::PerformanceCycles => view! { <PerformanceCycleList /> }.into_any(),
        Screen::CreatePerformanceCycle => view! { <CreatePerformanceCycle /> }.into_any(),
        Screen::UserManagement => view! { <UserList /> }.into_any(),
        Screen::DepartmentManagement => view! { <DepartmentList /> }.into_any(),
        Screen::Reports => view! { <ReportsPage /> }.into_any(),
        Screen::AuditTrail => view! { <AuditTrail /> }.into_any(),
        Screen::ApprovalQueue => view! { <ApprovalQueuePage /> }.into_any(),
        Screen::Goals => view! { <GoalList /> }.into_any(),
        Screen::Notifications => view! { <NotificationCenter /> }.into_any(),
        Screen::ComingSoon => view! { <ComingSoon path=path /> }.into_any(),
    }
}

#[component]
fn Content() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let role_ctx = use_role();

    // Rebuild only when the path actually changes.
    let path = Memo::new(move |_| ctx.path.get());

    // "/" is replaced by the landing route of the role.
    Effect::new(move |_| {
        if screen_for_path(&path.get()) == Screen::Home {
            if let Some(role) = role_ctx.role_untracked() {
                ctx.navigate(role.landing_route());
            }
        }
    });

    // Every page visit goes to the audit trail, except the "/" redirect.
    Effect::new(move |_| {
        let current = path.get();
        let screen = screen_for_path(&current);
        if screen == Screen::Home {
            return;
        }
        let details = match screen {
            Screen::ComingSoon => format!("Opened {}", normalize_path(&current)),
            _ => format!("Opened {}", screen_title(screen)),
        };
        report_in_background(AuditAction::Navigation, details, role_ctx.tag_untracked());
    });

    move || {
        let current = path.get();
        render_screen(screen_for_path(&current), current, role_ctx)
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Content /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let role_ctx = use_role();

    view! {
        <Show
            when=move || role_ctx.is_selected()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
