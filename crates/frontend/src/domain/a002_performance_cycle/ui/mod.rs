pub mod create;
pub mod list;

pub use create::CreatePerformanceCycle;
pub use list::PerformanceCycleList;
