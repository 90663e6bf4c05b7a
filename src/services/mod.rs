pub mod account;
pub mod news;
pub mod preferences_service;
pub mod session_service;
pub mod theme_service;
pub mod unconfigured;

pub use account::AccountClient;
pub use news::GNewsClient;
pub use preferences_service::PreferencesService;
pub use session_service::SessionStore;
pub use theme_service::{ThemeAccess, ThemeResolver};
pub use unconfigured::Unconfigured;
