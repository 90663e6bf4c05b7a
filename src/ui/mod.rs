pub mod navigation;
pub mod render;
pub mod screens;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use crate::base::{AccountApi, FixedAppearance, KeyValueStore, NewsSource};
use crate::config::AppConfig;
use crate::data::Database;
use crate::models::theme::Palette;
use crate::services::{
    AccountClient, GNewsClient, PreferencesService, SessionStore, ThemeAccess, ThemeResolver, Unconfigured,
};
use crate::utils::ensure_directory_exists;
use crate::ui::screens::{
    CategoriesScreen, CategoryScreen, DarkModeScreen, EditProfileScreen, HomeScreen, LanguageScreen, LoginScreen,
    PrivacyScreen, ProfileScreen, SearchScreen, SignupScreen, SplashScreen,
};

/// Shared collaborators from which every screen is built.
///
/// Screens receive exactly the pieces they use at construction; nothing is
/// looked up globally afterwards.
#[derive(Clone)]
pub struct AppContext {
    pub news: Arc<dyn NewsSource>,
    pub account: Arc<dyn AccountApi>,
    pub sessions: SessionStore,
    pub preferences: PreferencesService,
    pub theme: Arc<dyn ThemeAccess>,
    pub splash_delay: Duration,
    pub login_success_delay: Duration,
}

impl AppContext {
    /// Opens the database at the configured path and wires the HTTP clients.
    /// A missing API key or backend URL leaves that collaborator unconfigured.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        ensure_directory_exists(&config.database_path)?;
        let database = Database::open(&config.database_path)?;
        Ok(Self::with_store(config, database.settings_store()))
    }

    pub fn with_store(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let news: Arc<dyn NewsSource> = match &config.gnews_api_key {
            Some(key) => Arc::new(GNewsClient::new(config.gnews_base_url.clone(), key.clone())),
            None => {
                warn!("GNEWS_API_KEY is not set; news screens will fail to load");
                Arc::new(Unconfigured { setting: "GNEWS_API_KEY" })
            }
        };
        let account: Arc<dyn AccountApi> = match &config.backend_url {
            Some(url) => Arc::new(AccountClient::new(url.clone())),
            None => Arc::new(Unconfigured { setting: "BACKEND_URL" }),
        };

        let theme = ThemeResolver::load(store.clone(), Arc::new(FixedAppearance(config.appearance)));
        info!("Theme preference: {}", theme.preference());

        Self {
            news,
            account,
            sessions: SessionStore::new(store.clone()),
            preferences: PreferencesService::new(store),
            theme: Arc::new(theme),
            splash_delay: config.splash_delay,
            login_success_delay: config.login_success_delay,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn splash_screen(&self) -> SplashScreen {
        SplashScreen::new(self.theme.clone(), self.splash_delay)
    }

    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(
            self.account.clone(),
            self.sessions.clone(),
            self.theme.clone(),
            self.login_success_delay,
        )
    }

    pub fn signup_screen(&self) -> SignupScreen {
        SignupScreen::new(self.theme.clone())
    }

    pub fn home_screen(&self) -> HomeScreen {
        HomeScreen::new(self.news.clone(), self.theme.clone(), self.preferences.clone())
    }

    pub fn categories_screen(&self) -> CategoriesScreen {
        CategoriesScreen::new(self.theme.clone())
    }

    pub fn category_screen(&self, slug: &str) -> CategoryScreen {
        CategoryScreen::new(slug, self.news.clone(), self.theme.clone(), self.preferences.clone())
    }

    pub fn search_screen(&self) -> SearchScreen {
        SearchScreen::new(self.news.clone(), self.theme.clone(), self.preferences.clone())
    }

    pub fn profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(self.sessions.clone(), self.theme.clone())
    }

    pub fn edit_profile_screen(&self) -> EditProfileScreen {
        EditProfileScreen::new(self.account.clone(), self.sessions.clone(), self.theme.clone())
    }

    pub fn dark_mode_screen(&self) -> DarkModeScreen {
        DarkModeScreen::new(self.theme.clone())
    }

    pub fn language_screen(&self) -> LanguageScreen {
        LanguageScreen::new(self.preferences.clone(), self.theme.clone())
    }

    pub fn privacy_screen(&self) -> PrivacyScreen {
        PrivacyScreen::new(self.preferences.clone(), self.theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use crate::models::theme::DARK_PALETTE;
    use crate::ui::screens::feed::LoadState;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_fails_news_screens() {
        let ctx = AppContext::with_store(&config(&[]), Arc::new(MemoryStore::new()));
        let mut home = ctx.home_screen();

        home.open();
        let state = home.feed().settled().await;

        assert!(matches!(state, LoadState::Failed(_)));
    }

    #[test]
    fn test_stored_theme_applies_to_screens() {
        let store = Arc::new(MemoryStore::with_values([("theme", "system")]));
        let ctx = AppContext::with_store(&config(&[("MIKEDAILY_APPEARANCE", "dark")]), store);

        assert_eq!(ctx.palette(), &DARK_PALETTE);
        assert_eq!(ctx.profile_screen().palette(), &DARK_PALETTE);
        assert_eq!(ctx.theme.preference().as_str(), "system");
    }

    #[test]
    fn test_from_config_creates_database_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/app.db");
        let path_str = path.to_string_lossy().to_string();
        let ctx = AppContext::from_config(&config(&[("MIKEDAILY_DB", &path_str)]))?;

        assert!(path.exists());
        assert!(ctx.sessions.load()?.is_none());
        Ok(())
    }
}
