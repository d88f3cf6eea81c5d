pub mod pages;
pub mod role;
