mod report;

pub use report::ReportsPage;
