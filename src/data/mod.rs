pub mod database;
pub mod migration;
pub mod repositories;

pub use database::{ConnectionPool, Database};
pub use repositories::{MemoryStore, SqliteSettingsRepository};
