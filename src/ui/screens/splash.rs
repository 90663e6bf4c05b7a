use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::models::theme::Palette;
use crate::services::ThemeAccess;
use crate::ui::navigation::{Navigator, Route};

pub const TAGLINE: &str = "STAY informed, STAY updated";
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_secs(5);

/// Start-up screen that hands over to login after a fixed delay
pub struct SplashScreen {
    theme: Arc<dyn ThemeAccess>,
    delay: Duration,
}

impl SplashScreen {
    pub fn new(theme: Arc<dyn ThemeAccess>, delay: Duration) -> Self {
        Self { theme, delay }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub async fn run(&self, nav: &mut Navigator) {
        debug!("Splash shown for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        nav.replace(Route::Login);
    }
}
