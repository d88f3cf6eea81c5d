pub mod aggregate;

pub use aggregate::{
    known_users, summarize, AuditAction, AuditEntry, AuditFilter, AuditSummary, SessionEventDto,
};
