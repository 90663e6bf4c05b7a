use std::sync::Arc;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::base::KeyValueStore;
use crate::data::database::ConnectionPool;

/// `KeyValueStore` backed by the `settings` table
pub struct SqliteSettingsRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSettingsRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteSettingsRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.pool.get()?;
        let value = conn
            .query_row("SELECT value FROM settings WHERE key = ?", [key], |row| row.get(0))
            .optional()
            .with_context(|| format!("Failed to read setting '{}'", key))?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )
        .with_context(|| format!("Failed to write setting '{}'", key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM settings WHERE key = ?", [key])
            .with_context(|| format!("Failed to remove setting '{}'", key))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Database;

    #[test]
    fn test_set_get_remove() -> Result<()> {
        let store = Database::open_in_memory()?.settings_store();

        assert_eq!(store.get("theme")?, None);

        store.set("theme", "dark")?;
        assert_eq!(store.get("theme")?.as_deref(), Some("dark"));

        store.set("theme", "light")?;
        assert_eq!(store.get("theme")?.as_deref(), Some("light"));

        store.remove("theme")?;
        assert_eq!(store.get("theme")?, None);

        // Removing a missing key is not an error
        store.remove("theme")?;
        Ok(())
    }

    #[test]
    fn test_values_survive_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.db");

        Database::open(&path)?.settings_store().set("newsLanguage", "fr")?;

        let reopened = Database::open(&path)?.settings_store();
        assert_eq!(reopened.get("newsLanguage")?.as_deref(), Some("fr"));
        Ok(())
    }
}
