use std::sync::Arc;

use log::{error, info};

use crate::base::AccountApi;
use crate::error::AppError;
use crate::models::account::UpdateUserRequest;
use crate::models::news::NewsLanguage;
use crate::models::session::{PrivacySettings, SessionRecord};
use crate::models::theme::{Palette, ThemePreference};
use crate::services::{PreferencesService, SessionStore, ThemeAccess};
use crate::ui::navigation::{Navigator, Route};

pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated successfully";
pub const PASSWORDS_REQUIRED_MESSAGE: &str = "Please enter your old and new password";
pub const NOT_LOGGED_IN_MESSAGE: &str = "You are not logged in";

/// One row of the profile settings list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    pub title: &'static str,
    pub route: Route,
}

/// Profile tab
pub struct ProfileScreen {
    sessions: SessionStore,
    theme: Arc<dyn ThemeAccess>,
    session: Option<SessionRecord>,
}

impl ProfileScreen {
    pub fn new(sessions: SessionStore, theme: Arc<dyn ThemeAccess>) -> Self {
        let session = sessions.load().unwrap_or_else(|e| {
            error!("Failed to load session: {:#}", e);
            None
        });
        Self {
            sessions,
            theme,
            session,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn session(&self) -> Option<&SessionRecord> {
        self.session.as_ref()
    }

    pub fn name(&self) -> &str {
        self.session.as_ref().map(SessionRecord::display_name).unwrap_or("Guest")
    }

    pub fn email(&self) -> &str {
        self.session
            .as_ref()
            .and_then(|s| s.email.as_deref())
            .unwrap_or("")
    }

    pub fn account_settings(&self) -> Vec<SettingItem> {
        vec![
            SettingItem {
                title: "Edit Profile",
                route: Route::EditProfile,
            },
            SettingItem {
                title: "Privacy",
                route: Route::Privacy,
            },
        ]
    }

    pub fn preference_settings(&self) -> Vec<SettingItem> {
        vec![
            SettingItem {
                title: "Dark Mode",
                route: Route::DarkMode,
            },
            SettingItem {
                title: "Language",
                route: Route::Language,
            },
        ]
    }

    /// Forgets the session and returns to the login screen
    pub fn logout(&mut self, nav: &mut Navigator) -> Result<(), AppError> {
        self.sessions.clear().map_err(|e| {
            error!("Failed to clear session: {:#}", e);
            AppError::Storage("Could not log out".to_string())
        })?;
        self.session = None;
        nav.replace(Route::Login);
        Ok(())
    }
}

/// Edit profile form
pub struct EditProfileScreen {
    account: Arc<dyn AccountApi>,
    sessions: SessionStore,
    theme: Arc<dyn ThemeAccess>,
    user_id: Option<String>,
    pub username: String,
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

impl EditProfileScreen {
    /// Prefills username and email from the stored session
    pub fn new(account: Arc<dyn AccountApi>, sessions: SessionStore, theme: Arc<dyn ThemeAccess>) -> Self {
        let session = sessions.load().unwrap_or_else(|e| {
            error!("Failed to load session: {:#}", e);
            None
        });

        Self {
            account,
            sessions,
            theme,
            user_id: session.as_ref().map(|s| s.user_id.clone()),
            username: session.as_ref().and_then(|s| s.username.clone()).unwrap_or_default(),
            email: session.as_ref().and_then(|s| s.email.clone()).unwrap_or_default(),
            old_password: String::new(),
            new_password: String::new(),
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    /// Sends one combined update. Only username and email are written back
    /// locally; passwords never touch storage.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        let Some(user_id) = self.user_id.clone() else {
            return Err(AppError::validation(NOT_LOGGED_IN_MESSAGE));
        };
        if self.old_password.is_empty() || self.new_password.is_empty() {
            return Err(AppError::validation(PASSWORDS_REQUIRED_MESSAGE));
        }

        let update = UpdateUserRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            old_password: self.old_password.clone(),
            password: self.new_password.clone(),
        };

        self.account.update_user(&user_id, &update).await.map_err(|e| {
            error!("Profile update failed: {}", e);
            e.into_app_error("Update failed")
        })?;

        self.sessions
            .update_identity(Some(self.username.clone()), Some(self.email.clone()))
            .map_err(|e| {
                error!("Failed to store updated profile: {:#}", e);
                AppError::Storage("Could not save your profile".to_string())
            })?;

        self.old_password.clear();
        self.new_password.clear();
        info!("Profile updated for user {}", user_id);
        Ok(())
    }
}

/// One selectable option with its selection mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
    pub selected: bool,
}

/// Theme picker
pub struct DarkModeScreen {
    theme: Arc<dyn ThemeAccess>,
}

impl DarkModeScreen {
    pub fn new(theme: Arc<dyn ThemeAccess>) -> Self {
        Self { theme }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn modes(&self) -> Vec<Choice<ThemePreference>> {
        let current = self.theme.preference();
        ThemePreference::ALL
            .into_iter()
            .map(|mode| Choice {
                value: mode,
                label: mode.label(),
                selected: mode == current,
            })
            .collect()
    }

    pub fn select(&self, mode: ThemePreference) {
        self.theme.set_preference(mode);
    }
}

/// News language picker
pub struct LanguageScreen {
    preferences: PreferencesService,
    theme: Arc<dyn ThemeAccess>,
    selected: NewsLanguage,
}

impl LanguageScreen {
    pub fn new(preferences: PreferencesService, theme: Arc<dyn ThemeAccess>) -> Self {
        let selected = preferences.language();
        Self {
            preferences,
            theme,
            selected,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn languages(&self) -> Vec<Choice<NewsLanguage>> {
        NewsLanguage::ALL
            .into_iter()
            .map(|lang| Choice {
                value: lang,
                label: lang.label(),
                selected: lang == self.selected,
            })
            .collect()
    }

    pub fn select(&mut self, language: NewsLanguage) -> Result<(), AppError> {
        self.preferences.set_language(language).map_err(|e| {
            error!("Failed to store news language: {:#}", e);
            AppError::Storage("Could not save your language".to_string())
        })?;
        self.selected = language;
        Ok(())
    }
}

/// Local privacy toggles
pub struct PrivacyScreen {
    preferences: PreferencesService,
    theme: Arc<dyn ThemeAccess>,
    settings: PrivacySettings,
}

impl PrivacyScreen {
    pub fn new(preferences: PreferencesService, theme: Arc<dyn ThemeAccess>) -> Self {
        let settings = preferences.privacy();
        Self {
            preferences,
            theme,
            settings,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn settings(&self) -> PrivacySettings {
        self.settings
    }

    pub fn set_private(&mut self, is_private: bool) -> Result<(), AppError> {
        self.apply(PrivacySettings {
            is_private,
            ..self.settings
        })
    }

    pub fn set_show_email(&mut self, show_email: bool) -> Result<(), AppError> {
        self.apply(PrivacySettings {
            show_email,
            ..self.settings
        })
    }

    fn apply(&mut self, settings: PrivacySettings) -> Result<(), AppError> {
        self.preferences.set_privacy(settings).map_err(|e| {
            error!("Failed to store privacy settings: {:#}", e);
            AppError::Storage("Could not save your privacy settings".to_string())
        })?;
        self.settings = settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FixedAppearance, KeyValueStore};
    use crate::data::MemoryStore;
    use crate::models::account::LoginResponse;
    use crate::services::ThemeResolver;
    use crate::testing::{FailingStore, FakeAccount, FakeAccountOutcome};

    fn theme(store: Arc<dyn KeyValueStore>) -> Arc<dyn ThemeAccess> {
        Arc::new(ThemeResolver::load(store, Arc::new(FixedAppearance(None))))
    }

    fn account(outcome: FakeAccountOutcome) -> Arc<FakeAccount> {
        FakeAccount::new(
            LoginResponse {
                user_id: "42".into(),
                email: None,
                username: None,
            },
            outcome,
        )
    }

    fn logged_in_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        SessionStore::new(store.clone())
            .save(&SessionRecord::new("42", Some("ann@example.com".into()), Some("ann".into())))
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_edit_profile_prefills_and_updates_identity() {
        let store = logged_in_store();
        let account = account(FakeAccountOutcome::Ok);
        let mut screen = EditProfileScreen::new(account.clone(), SessionStore::new(store.clone()), theme(store.clone()));
        assert_eq!(screen.username, "ann");
        assert_eq!(screen.email, "ann@example.com");

        screen.username = "annie".into();
        screen.old_password = "old".into();
        screen.new_password = "new".into();
        screen.submit().await.unwrap();

        let updates = account.updates.lock().unwrap().clone();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "42");
        assert_eq!(updates[0].1.old_password, "old");
        assert_eq!(updates[0].1.password, "new");

        let record = SessionStore::new(store.clone()).load().unwrap().unwrap();
        assert_eq!(record, SessionRecord::new("42", Some("ann@example.com".into()), Some("annie".into())));
        assert!(!store.get("session").unwrap().unwrap().contains("new\""));
        assert!(screen.new_password.is_empty());
    }

    #[tokio::test]
    async fn test_empty_new_password_rejected_before_request() {
        let store = logged_in_store();
        let account = account(FakeAccountOutcome::Ok);
        let mut screen = EditProfileScreen::new(account.clone(), SessionStore::new(store.clone()), theme(store));
        screen.old_password = "old".into();

        let err = screen.submit().await.unwrap_err();

        assert_eq!(err, AppError::Validation(PASSWORDS_REQUIRED_MESSAGE.into()));
        assert_eq!(account.call_count(), 0);
    }

    #[tokio::test]
    async fn test_edit_profile_requires_session() {
        let store = Arc::new(MemoryStore::new());
        let account = account(FakeAccountOutcome::Ok);
        let mut screen = EditProfileScreen::new(account.clone(), SessionStore::new(store.clone()), theme(store));
        screen.old_password = "old".into();
        screen.new_password = "new".into();

        assert_eq!(screen.submit().await.unwrap_err().message(), NOT_LOGGED_IN_MESSAGE);
        assert_eq!(account.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_stored_identity() {
        let store = logged_in_store();
        let account = account(FakeAccountOutcome::Rejected(Some("Old password is incorrect".into())));
        let mut screen = EditProfileScreen::new(account, SessionStore::new(store.clone()), theme(store.clone()));
        screen.username = "mallory".into();
        screen.old_password = "wrong".into();
        screen.new_password = "new".into();

        let err = screen.submit().await.unwrap_err();

        assert_eq!(err, AppError::Business("Old password is incorrect".into()));
        let record = SessionStore::new(store).load().unwrap().unwrap();
        assert_eq!(record.username.as_deref(), Some("ann"));
    }

    #[test]
    fn test_profile_shows_identity_and_logs_out() {
        let store = logged_in_store();
        let mut screen = ProfileScreen::new(SessionStore::new(store.clone()), theme(store.clone()));
        assert_eq!(screen.name(), "ann");
        assert_eq!(screen.email(), "ann@example.com");

        let mut nav = Navigator::new(Route::Home);
        nav.push(Route::Profile);
        screen.logout(&mut nav).unwrap();

        assert_eq!(nav.current(), &Route::Login);
        assert_eq!(screen.name(), "Guest");
        assert!(store.get("session").unwrap().is_none());
    }

    #[test]
    fn test_dark_mode_selection_persists() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let screen = DarkModeScreen::new(theme(store.clone()));
        let selected: Vec<ThemePreference> = screen.modes().into_iter().filter(|c| c.selected).map(|c| c.value).collect();
        assert_eq!(selected, vec![ThemePreference::System]);

        screen.select(ThemePreference::Dark);

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(screen.palette().is_dark());
        assert!(screen.modes()[1].selected);
    }

    #[test]
    fn test_language_selection() {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::new()));
        let mut screen = LanguageScreen::new(prefs.clone(), theme(Arc::new(MemoryStore::new())));
        assert!(screen.languages()[0].selected);

        screen.select(NewsLanguage::Es).unwrap();

        assert_eq!(prefs.language(), NewsLanguage::Es);
        assert!(screen.languages().iter().any(|c| c.value == NewsLanguage::Es && c.selected));
    }

    #[test]
    fn test_privacy_toggles() {
        let prefs = PreferencesService::new(Arc::new(MemoryStore::new()));
        let mut screen = PrivacyScreen::new(prefs.clone(), theme(Arc::new(MemoryStore::new())));

        screen.set_private(true).unwrap();
        screen.set_show_email(false).unwrap();

        assert_eq!(
            prefs.privacy(),
            PrivacySettings {
                is_private: true,
                show_email: false
            }
        );

        let mut failing = PrivacyScreen::new(PreferencesService::new(Arc::new(FailingStore)), theme(Arc::new(FailingStore)));
        assert!(failing.set_private(true).is_err());
        assert!(!failing.settings().is_private);
    }
}
