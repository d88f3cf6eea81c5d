pub mod aggregate;

pub use aggregate::{CycleId, CycleStatus, CycleType, PerformanceCycle, PerformanceCycleDto};
