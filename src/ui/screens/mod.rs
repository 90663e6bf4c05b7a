pub mod auth;
pub mod feed;
pub mod news;
pub mod profile;
pub mod splash;

pub use auth::{LoginScreen, LoginStatus, SignupScreen};
pub use feed::{LoadState, NewsFeed, ScreenTask};
pub use news::{CategoriesScreen, Category, CategoryScreen, HomeScreen, SearchScreen, CATEGORIES};
pub use profile::{DarkModeScreen, EditProfileScreen, LanguageScreen, PrivacyScreen, ProfileScreen};
pub use splash::SplashScreen;
