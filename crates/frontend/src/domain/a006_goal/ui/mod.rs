pub mod list;

pub use list::GoalList;
