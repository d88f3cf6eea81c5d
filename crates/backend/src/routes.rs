use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// All application routes.
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 KPI
        .route(
            "/api/kpi",
            get(handlers::a001_kpi::list).post(handlers::a001_kpi::upsert),
        )
        .route("/api/kpi/import", post(handlers::a001_kpi::import))
        .route("/api/kpi/export", get(handlers::a001_kpi::export))
        .route(
            "/api/kpi/:id",
            get(handlers::a001_kpi::get_by_id).delete(handlers::a001_kpi::delete),
        )
        .route("/api/kpi/:id/approval", post(handlers::a001_kpi::decide))
        // A002 Performance cycles
        .route(
            "/api/performance_cycle",
            get(handlers::a002_performance_cycle::list)
                .post(handlers::a002_performance_cycle::create),
        )
        .route(
            "/api/performance_cycle/:id/advance",
            post(handlers::a002_performance_cycle::advance),
        )
        // A003 Departments
        .route(
            "/api/department",
            get(handlers::a003_department::list).post(handlers::a003_department::create),
        )
        .route(
            "/api/department/summary",
            get(handlers::a003_department::summary),
        )
        // A004 Audit trail
        .route(
            "/api/audit",
            get(handlers::a004_audit_entry::list)
                .post(handlers::a004_audit_entry::record_session_event),
        )
        .route("/api/audit/summary", get(handlers::a004_audit_entry::summary))
        // A005 Users
        .route(
            "/api/user",
            get(handlers::a005_user::list).post(handlers::a005_user::create),
        )
        // A006 Goals
        .route(
            "/api/goal",
            get(handlers::a006_goal::list).post(handlers::a006_goal::upsert),
        )
        .route("/api/goal/summary", get(handlers::a006_goal::summary))
        .route("/api/goal/:id", get(handlers::a006_goal::get_by_id))
        // A007 Notifications
        .route("/api/notification", get(handlers::a007_notification::feed))
        .route(
            "/api/notification/read-all",
            post(handlers::a007_notification::mark_all_read),
        )
        .route(
            "/api/notification/:id/read",
            post(handlers::a007_notification::mark_read),
        )
        // Dashboards
        .route("/api/d400/summary", get(handlers::d400_kpi_summary::get_summary))
        .route("/api/d401/:role", get(handlers::d401_role_dashboard::get_dashboard))
        .route("/api/d402/report", get(handlers::d402_kpi_report::get_report))
        .route("/api/d403/cycles", get(handlers::d403_cycle_summary::get_summary))
        .route("/api/d404/approvals", get(handlers::d404_approval_queue::get_queue))
        // Navigation
        .route(
            "/api/navigation/:role",
            get(handlers::navigation::get_navigation),
        )
        .with_state(state)
}
