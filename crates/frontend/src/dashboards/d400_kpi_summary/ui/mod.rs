mod dashboard;

pub use dashboard::KpiDashboard;
