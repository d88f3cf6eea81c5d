pub mod aggregate;

pub use aggregate::{Goal, GoalDto, GoalId, GoalPriority, GoalStatus, ALIGNMENTS, CATEGORIES};
