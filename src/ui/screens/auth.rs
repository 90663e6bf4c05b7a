use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};

use crate::base::AccountApi;
use crate::error::AppError;
use crate::models::session::SessionRecord;
use crate::models::theme::Palette;
use crate::services::{SessionStore, ThemeAccess};
use crate::ui::navigation::{Navigator, Route};

pub const APP_TITLE: &str = "MikeDaily";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields";
pub const DEFAULT_LOGIN_SUCCESS_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(AppError),
}

pub struct LoginScreen {
    account: Arc<dyn AccountApi>,
    sessions: SessionStore,
    theme: Arc<dyn ThemeAccess>,
    success_delay: Duration,
    pub email: String,
    pub password: String,
    status: LoginStatus,
}

impl LoginScreen {
    pub fn new(
        account: Arc<dyn AccountApi>,
        sessions: SessionStore,
        theme: Arc<dyn ThemeAccess>,
        success_delay: Duration,
    ) -> Self {
        Self {
            account,
            sessions,
            theme,
            success_delay,
            email: String::new(),
            password: String::new(),
            status: LoginStatus::Idle,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn status(&self) -> &LoginStatus {
        &self.status
    }

    /// Logs in, stores the session, holds the success message for the
    /// configured delay and then replaces the route with home.
    ///
    /// On any failure the stored session is left as it was.
    pub async fn submit(&mut self, nav: &mut Navigator) -> Result<(), AppError> {
        let result = self.try_login().await;

        match result {
            Ok(()) => {
                self.status = LoginStatus::Succeeded;
                tokio::time::sleep(self.success_delay).await;
                nav.replace(Route::Home);
                Ok(())
            }
            Err(e) => {
                self.status = LoginStatus::Failed(e.clone());
                Err(e)
            }
        }
    }

    async fn try_login(&mut self) -> Result<(), AppError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AppError::validation(MISSING_FIELDS_MESSAGE));
        }

        self.status = LoginStatus::Submitting;
        let response = self
            .account
            .login(&self.email, &self.password)
            .await
            .map_err(|e| {
                error!("Login failed: {}", e);
                e.into_app_error("Login failed")
            })?;

        let record = SessionRecord::from(response);
        self.sessions.save(&record).map_err(|e| {
            error!("Failed to store session: {:#}", e);
            AppError::Storage("Could not save your session".to_string())
        })?;

        info!("Logged in as {}", record.display_name());
        Ok(())
    }
}

/// Sign-up form. The account API has no registration endpoint, so a valid
/// submission is only recorded in the log.
pub struct SignupScreen {
    theme: Arc<dyn ThemeAccess>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupScreen {
    pub fn new(theme: Arc<dyn ThemeAccess>) -> Self {
        Self {
            theme,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn submit(&self) -> Result<(), AppError> {
        let fields = [&self.username, &self.email, &self.password, &self.confirm_password];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(AppError::validation(MISSING_FIELDS_MESSAGE));
        }

        debug!("Signup attempted for {} ({})", self.username, self.email);
        Ok(())
    }
}
