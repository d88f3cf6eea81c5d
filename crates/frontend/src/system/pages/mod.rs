pub mod coming_soon;
pub mod login;
