use anyhow::Result;

/// Key names used in the local settings store
pub mod keys {
    pub const SESSION: &str = "session";
    pub const THEME: &str = "theme";
    pub const NEWS_LANGUAGE: &str = "newsLanguage";
    pub const PRIVACY: &str = "privacy";

    /// Flat identity keys written before the session record existed
    pub const LEGACY_USER_ID: &str = "userId";
    pub const LEGACY_EMAIL: &str = "email";
    pub const LEGACY_USERNAME: &str = "username";
}

/// Device-local string key/value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
