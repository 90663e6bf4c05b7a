use anyhow::{Context, Result};
use log::{debug, info, warn};
use rusqlite::{Connection, OptionalExtension};

use crate::base::keys;
use crate::models::session::SessionRecord;

/// Applies one-shot data migrations to the settings database
pub struct MigrationManager<'a> {
    connection: &'a Connection,
}

impl<'a> MigrationManager<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Run all pending migrations. Safe to call on every start.
    ///
    /// Expects `data/schema.sql` to have been applied, which creates the
    /// `migrations` table.
    pub fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations");

        self.migrate_fold_legacy_identity_keys()?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    fn is_migration_applied(&self, name: &str) -> Result<bool> {
        let count: i64 = self
            .connection
            .query_row("SELECT COUNT(*) FROM migrations WHERE name = ?", [name], |row| row.get(0))
            .context("Failed to check if migration has been applied")?;

        Ok(count > 0)
    }

    fn record_migration(&self, name: &str) -> Result<()> {
        debug!("Recording migration '{}' as applied", name);

        self.connection
            .execute(
                "INSERT INTO migrations (name, applied_at) VALUES (?, datetime('now'))",
                [name],
            )
            .context("Failed to record migration")?;

        Ok(())
    }

    fn read_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row("SELECT value FROM settings WHERE key = ?", [key], |row| row.get(0))
            .optional()
            .with_context(|| format!("Failed to read setting '{}'", key))
    }

    /// Migration: fold the flat `userId`/`email`/`username` keys into one
    /// versioned `session` record.
    ///
    /// An existing `session` record wins over the legacy keys. Legacy keys
    /// without a user id can't form a session and are dropped.
    fn migrate_fold_legacy_identity_keys(&self) -> Result<()> {
        const MIGRATION_NAME: &str = "fold_legacy_identity_keys";

        if self.is_migration_applied(MIGRATION_NAME)? {
            debug!("Migration '{}' already recorded as applied, skipping", MIGRATION_NAME);
            return Ok(());
        }

        info!("Running migration: {}", MIGRATION_NAME);

        let tx = self
            .connection
            .unchecked_transaction()
            .context("Failed to start migration transaction")?;

        let user_id = self.read_setting(keys::LEGACY_USER_ID)?;
        let email = self.read_setting(keys::LEGACY_EMAIL)?;
        let username = self.read_setting(keys::LEGACY_USERNAME)?;
        let has_session = self.read_setting(keys::SESSION)?.is_some();

        match user_id {
            Some(user_id) if !has_session => {
                let record = SessionRecord::new(user_id, email, username);
                let value = serde_json::to_string(&record)?;
                tx.execute(
                    "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, datetime('now'))",
                    [keys::SESSION, value.as_str()],
                )
                .context("Failed to write migrated session record")?;
                info!("Migrated legacy identity keys into a session record");
            }
            Some(_) => debug!("Session record already present, dropping legacy identity keys"),
            None if email.is_some() || username.is_some() => {
                warn!("Legacy identity keys without a user id, dropping them");
            }
            None => {}
        }

        tx.execute(
            "DELETE FROM settings WHERE key IN (?, ?, ?)",
            [keys::LEGACY_USER_ID, keys::LEGACY_EMAIL, keys::LEGACY_USERNAME],
        )
        .context("Failed to remove legacy identity keys")?;

        // Same connection, so this lands inside the transaction
        self.record_migration(MIGRATION_NAME)?;

        tx.commit().context("Failed to commit migration")?;
        Ok(())
    }
}
