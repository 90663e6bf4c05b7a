use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

use crate::base::KeyValueStore;
use crate::data::migration::MigrationManager;
use crate::data::repositories::SqliteSettingsRepository;

pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Handle to the local SQLite database
#[derive(Clone)]
pub struct Database {
    pool: Arc<ConnectionPool>,
}

impl Database {
    /// Opens (creating if needed) the database file and brings its schema up to date
    pub fn open(db_path: &Path) -> Result<Self> {
        info!("Opening database at {}", db_path.display());
        let manager = SqliteConnectionManager::file(db_path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);
        let pool = Pool::new(manager).context("Failed to create connection pool")?;
        Self::init(pool)
    }

    /// A private in-memory database. Every pooled connection would see its own
    /// empty database, so the pool is capped at one connection.
    pub fn open_in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .context("Failed to create in-memory connection pool")?;
        Self::init(pool)
    }

    fn init(pool: ConnectionPool) -> Result<Self> {
        {
            let conn = pool.get()?;
            debug!("Applying schema");
            conn.execute_batch(include_str!("../../data/schema.sql"))
                .context("Failed to apply schema")?;
            MigrationManager::new(&conn).run_migrations()?;
        }

        Ok(Self { pool: Arc::new(pool) })
    }

    pub fn settings_store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(SqliteSettingsRepository::new(self.pool.clone()))
    }

    pub fn pool(&self) -> Arc<ConnectionPool> {
        self.pool.clone()
    }
}
