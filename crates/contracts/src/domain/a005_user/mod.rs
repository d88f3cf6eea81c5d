pub mod aggregate;

pub use aggregate::{User, UserDto, UserId};
