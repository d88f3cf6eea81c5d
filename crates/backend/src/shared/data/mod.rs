pub mod db;
pub mod gateway;
pub mod memory;
pub mod seed;
pub mod sqlite;

pub use gateway::DataGateway;
pub use memory::InMemoryGateway;
pub use sqlite::SqliteGateway;
