use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::base::{keys, KeyValueStore};
use crate::models::session::{SessionRecord, SESSION_VERSION};

/// Reads and writes the stored session record
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The current session, if any. Unreadable or foreign-version records
    /// count as logged out.
    pub fn load(&self) -> Result<Option<SessionRecord>> {
        let Some(raw) = self.store.get(keys::SESSION)? else {
            return Ok(None);
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) if record.version == SESSION_VERSION => Ok(Some(record)),
            Ok(record) => {
                warn!("Ignoring session record with version {}", record.version);
                Ok(None)
            }
            Err(e) => {
                warn!("Ignoring unreadable session record: {}", e);
                Ok(None)
            }
        }
    }

    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let value = serde_json::to_string(record).context("Failed to encode session record")?;
        self.store.set(keys::SESSION, &value)?;
        info!("Session stored for user {}", record.user_id);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::SESSION)?;
        info!("Session cleared");
        Ok(())
    }

    /// Replaces username and email of the stored session, leaving the id alone
    pub fn update_identity(&self, username: Option<String>, email: Option<String>) -> Result<Option<SessionRecord>> {
        let Some(mut record) = self.load()? else {
            return Ok(None);
        };
        record.username = username;
        record.email = email;
        self.save(&record)?;
        Ok(Some(record))
    }
}
