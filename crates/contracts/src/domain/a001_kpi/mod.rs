pub mod aggregate;
pub mod approval;
pub mod filter;
pub mod import;

pub use aggregate::{Frequency, Kpi, KpiDto, KpiId, KpiStatus};
pub use approval::{Approval, ApprovalDecision, ApprovalError, ApprovalRequest, ApprovalStatus};
pub use filter::KpiFilter;
pub use import::{ImportReport, RejectedRow};
