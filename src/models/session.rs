use serde::{Deserialize, Serialize};

/// Current layout of the stored session record
pub const SESSION_VERSION: u32 = 1;

/// Identity of the logged-in user, stored as one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub version: u32,
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl SessionRecord {
    pub fn new(user_id: impl Into<String>, email: Option<String>, username: Option<String>) -> Self {
        Self {
            version: SESSION_VERSION,
            user_id: user_id.into(),
            email,
            username,
        }
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.user_id)
    }
}

/// Local-only privacy toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub is_private: bool,
    pub show_email: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            is_private: false,
            show_email: true,
        }
    }
}
