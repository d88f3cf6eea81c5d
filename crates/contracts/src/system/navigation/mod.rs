pub mod menu;
pub mod role;
pub mod routes;

pub use menu::{resolve, NavItem, NavSection, Navigation};
pub use role::Role;
pub use routes::{normalize_path, screen_for_path, screen_title, Screen};
