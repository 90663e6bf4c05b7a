use std::sync::Arc;

use anyhow::{Context, Result};
use log::warn;

use crate::base::{keys, KeyValueStore};
use crate::models::news::NewsLanguage;
use crate::models::session::PrivacySettings;

/// Locally persisted reader preferences other than the theme
#[derive(Clone)]
pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Language for news requests; English when unset or unreadable
    pub fn language(&self) -> NewsLanguage {
        match self.store.get(keys::NEWS_LANGUAGE) {
            Ok(Some(code)) => code.parse().unwrap_or_else(|_| {
                warn!("Ignoring stored news language '{}'", code);
                NewsLanguage::default()
            }),
            Ok(None) => NewsLanguage::default(),
            Err(e) => {
                warn!("Failed to read news language: {}", e);
                NewsLanguage::default()
            }
        }
    }

    pub fn set_language(&self, language: NewsLanguage) -> Result<()> {
        self.store.set(keys::NEWS_LANGUAGE, language.code())
    }

    pub fn privacy(&self) -> PrivacySettings {
        match self.store.get(keys::PRIVACY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring unreadable privacy settings: {}", e);
                PrivacySettings::default()
            }),
            Ok(None) => PrivacySettings::default(),
            Err(e) => {
                warn!("Failed to read privacy settings: {}", e);
                PrivacySettings::default()
            }
        }
    }

    pub fn set_privacy(&self, settings: PrivacySettings) -> Result<()> {
        let value = serde_json::to_string(&settings).context("Failed to encode privacy settings")?;
        self.store.set(keys::PRIVACY, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use crate::testing::FailingStore;

    #[test]
    fn test_language_round_trip() -> Result<()> {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.language(), NewsLanguage::En);

        prefs.set_language(NewsLanguage::Pt)?;
        assert_eq!(prefs.language(), NewsLanguage::Pt);
        Ok(())
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::with_values([
            ("newsLanguage", "klingon"),
            ("privacy", "{"),
        ])));
        assert_eq!(prefs.language(), NewsLanguage::En);
        assert_eq!(prefs.privacy(), PrivacySettings::default());

        let failing = PreferencesService::new(Arc::new(FailingStore));
        assert_eq!(failing.language(), NewsLanguage::En);
        assert!(failing.set_language(NewsLanguage::De).is_err());
    }

    #[test]
    fn test_privacy_round_trip() -> Result<()> {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::new()));
        let settings = PrivacySettings {
            is_private: true,
            show_email: false,
        };
        prefs.set_privacy(settings)?;
        assert_eq!(prefs.privacy(), settings);
        Ok(())
    }
}
