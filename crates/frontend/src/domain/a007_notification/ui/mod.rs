pub mod feed;

pub use feed::NotificationCenter;
