pub mod api_utils;
pub mod components;
pub mod export;
pub mod format;
pub mod icons;
