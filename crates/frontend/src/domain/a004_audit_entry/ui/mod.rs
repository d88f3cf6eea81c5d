pub mod list;

pub use list::AuditTrail;
