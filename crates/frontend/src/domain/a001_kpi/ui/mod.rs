pub mod batch_upload;
pub mod details;
pub mod list;

pub use batch_upload::BatchKpiUpload;
pub use details::{CreateKpiPage, KpiDetails};
pub use list::KpiList;
