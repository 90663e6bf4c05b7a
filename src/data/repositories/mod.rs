mod memory_store;
mod settings_repository;

pub use memory_store::MemoryStore;
pub use settings_repository::SqliteSettingsRepository;
