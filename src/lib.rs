pub mod base;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export collaborator seams
pub use base::{AccountApi, Appearance, FixedAppearance, KeyValueStore, NewsSource};

// Re-export models
pub use models::{
    news::{NewsItem, NewsLanguage, NewsRequest, Topic},
    session::{PrivacySettings, SessionRecord},
    theme::{ColorScheme, Palette, ThemePreference},
};

pub use config::AppConfig;
pub use error::{AccountError, AppError, NewsError};

// Re-export services selectively
pub use services::{AccountClient, GNewsClient, PreferencesService, SessionStore, ThemeAccess, ThemeResolver};

pub use ui::AppContext;
