pub mod actor;
pub mod middleware;
pub mod tracing;
