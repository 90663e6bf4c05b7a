pub mod account;
pub mod news;
pub mod session;
pub mod theme;

pub use account::{LoginRequest, LoginResponse, UpdateUserRequest, UpdatedUser};
pub use news::{NewsEndpoint, NewsItem, NewsLanguage, NewsRequest, NewsSourceInfo, Topic};
pub use session::{PrivacySettings, SessionRecord, SESSION_VERSION};
pub use theme::{ColorScheme, Palette, ThemePreference, DARK_PALETTE, LIGHT_PALETTE};
