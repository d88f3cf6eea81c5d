pub mod aggregate_id;
pub mod criteria;

pub use aggregate_id::AggregateId;
pub use criteria::{criterion, is_wildcard};
