pub mod d400_kpi_summary;
pub mod d401_role_dashboard;
pub mod d402_kpi_report;
pub mod d403_cycle_summary;
pub mod d404_approval_queue;
pub mod d405_goal_summary;
