mod dashboard;

pub use dashboard::RoleDashboardPage;
