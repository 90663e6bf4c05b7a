use async_trait::async_trait;

use crate::error::{AccountError, NewsError};
use crate::models::{
    account::{LoginResponse, UpdateUserRequest, UpdatedUser},
    news::{NewsItem, NewsRequest},
    theme::ColorScheme,
};

/// A news backend the data screens read from
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the articles of one response, which may be empty
    async fn fetch(&self, request: &NewsRequest) -> Result<Vec<NewsItem>, NewsError>;
}

/// The remote user-account API
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AccountError>;
    async fn update_user(&self, user_id: &str, update: &UpdateUserRequest) -> Result<UpdatedUser, AccountError>;
}

/// The platform's light/dark signal
pub trait Appearance: Send + Sync {
    /// `None` when the platform doesn't report one
    fn color_scheme(&self) -> Option<ColorScheme>;
}

/// Appearance that never changes, used when the platform is configured up front
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance(pub Option<ColorScheme>);

impl Appearance for FixedAppearance {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.0
    }
}
