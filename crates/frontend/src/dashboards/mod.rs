pub mod d400_kpi_summary;
pub mod d401_role_dashboard;
pub mod d402_kpi_report;
pub mod d403_cycle_summary;
pub mod d404_approval_queue;
pub mod d405_goal_summary;

pub use d400_kpi_summary::ui::KpiDashboard;
pub use d401_role_dashboard::ui::RoleDashboardPage;
pub use d402_kpi_report::ui::ReportsPage;
pub use d404_approval_queue::ui::ApprovalQueuePage;
