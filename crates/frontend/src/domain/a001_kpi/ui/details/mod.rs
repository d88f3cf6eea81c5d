//! KPI create / edit form
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos components

mod view;
mod view_model;

pub use view::{CreateKpiPage, KpiDetails};
pub use view_model::KpiDetailsViewModel;
