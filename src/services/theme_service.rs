use std::sync::{Arc, RwLock};

use log::{debug, warn};

use crate::base::{keys, Appearance, KeyValueStore};
use crate::models::theme::{Palette, ThemePreference};

/// Read/write access to the theme, handed to every screen at construction
pub trait ThemeAccess: Send + Sync {
    fn preference(&self) -> ThemePreference;
    fn set_preference(&self, preference: ThemePreference);
    /// Re-resolved on every call, so `System` tracks the platform
    fn palette(&self) -> &'static Palette;
}

/// Holds the user's theme preference and resolves it to a palette
pub struct ThemeResolver {
    store: Arc<dyn KeyValueStore>,
    appearance: Arc<dyn Appearance>,
    preference: RwLock<ThemePreference>,
}

impl ThemeResolver {
    /// Loads the stored preference. Missing, invalid or unreadable values
    /// resolve to `System`.
    pub fn load(store: Arc<dyn KeyValueStore>, appearance: Arc<dyn Appearance>) -> Self {
        let preference = match store.get(keys::THEME) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring stored theme '{}'", raw);
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                ThemePreference::System
            }
        };
        debug!("Theme preference loaded: {}", preference);

        Self {
            store,
            appearance,
            preference: RwLock::new(preference),
        }
    }
}

impl ThemeAccess for ThemeResolver {
    fn preference(&self) -> ThemePreference {
        *self.preference.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Memory is updated first; a failed write is logged and not rolled back.
    fn set_preference(&self, preference: ThemePreference) {
        *self.preference.write().unwrap_or_else(|e| e.into_inner()) = preference;

        if let Err(e) = self.store.set(keys::THEME, preference.as_str()) {
            warn!("Failed to persist theme preference '{}': {}", preference, e);
        }
    }

    fn palette(&self) -> &'static Palette {
        Palette::resolve(self.preference(), self.appearance.color_scheme())
    }
}
