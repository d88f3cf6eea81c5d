pub mod aggregate;

pub use aggregate::{summarize, Department, DepartmentId, DepartmentSummary};
