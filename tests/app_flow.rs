use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use mikedaily::data::{Database, MemoryStore};
use mikedaily::models::account::{LoginResponse, UpdateUserRequest, UpdatedUser};
use mikedaily::ui::navigation::{Navigator, Route};
use mikedaily::ui::screens::feed::LoadState;
use mikedaily::{
    AccountApi, AccountError, AppConfig, AppContext, FixedAppearance, KeyValueStore, NewsError, NewsItem,
    NewsLanguage, NewsRequest, NewsSource, PreferencesService, SessionStore, ThemePreference, ThemeResolver,
};

struct StaticNews {
    requests: Mutex<Vec<NewsRequest>>,
}

#[async_trait]
impl NewsSource for StaticNews {
    async fn fetch(&self, request: &NewsRequest) -> Result<Vec<NewsItem>, NewsError> {
        self.requests.lock().unwrap().push(request.clone());
        let items = (0..5)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "title": format!("Headline {i}"),
                    "url": format!("https://news.example.com/{i}"),
                    "source": { "name": "Example Wire" }
                }))
                .unwrap()
            })
            .collect();
        Ok(items)
    }
}

struct AcceptingAccount;

#[async_trait]
impl AccountApi for AcceptingAccount {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginResponse, AccountError> {
        Ok(LoginResponse {
            user_id: "u-1".into(),
            email: Some(email.into()),
            username: Some("ann".into()),
        })
    }

    async fn update_user(&self, user_id: &str, update: &UpdateUserRequest) -> Result<UpdatedUser, AccountError> {
        Ok(UpdatedUser {
            user_id: Some(user_id.into()),
            username: Some(update.username.clone()),
            email: Some(update.email.clone()),
        })
    }
}

fn context(store: Arc<dyn KeyValueStore>, news: Arc<StaticNews>) -> AppContext {
    AppContext {
        news,
        account: Arc::new(AcceptingAccount),
        sessions: SessionStore::new(store.clone()),
        preferences: PreferencesService::new(store.clone()),
        theme: Arc::new(ThemeResolver::load(store, Arc::new(FixedAppearance(None)))),
        splash_delay: Duration::from_millis(5),
        login_success_delay: Duration::from_millis(5),
    }
}

fn news() -> Arc<StaticNews> {
    Arc::new(StaticNews {
        requests: Mutex::new(Vec::new()),
    })
}

#[tokio::test]
async fn test_splash_login_home_profile_logout() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let source = news();
    let ctx = context(store, source.clone());
    let mut nav = Navigator::default();

    ctx.splash_screen().run(&mut nav).await;
    assert_eq!(nav.current(), &Route::Login);

    let mut login = ctx.login_screen();
    login.email = "ann@example.com".into();
    login.password = "secret".into();
    login.submit(&mut nav).await.unwrap();
    assert_eq!(nav.current(), &Route::Home);

    let mut home = ctx.home_screen();
    home.open();
    let state = home.feed().settled().await;
    assert_eq!(state.items().len(), 5);
    assert_eq!(home.featured().len(), 3);
    assert_eq!(state.items()[0].source_name(), "Example Wire");

    let mut profile = ctx.profile_screen();
    assert_eq!(profile.name(), "ann");
    assert_eq!(profile.email(), "ann@example.com");

    profile.logout(&mut nav).unwrap();
    assert_eq!(nav.current(), &Route::Login);
    assert!(ctx.sessions.load().unwrap().is_none());
}

#[tokio::test]
async fn test_preferences_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.db");

    {
        let database = Database::open(&path).unwrap();
        let ctx = context(database.settings_store(), news());
        ctx.dark_mode_screen().select(ThemePreference::Dark);
        ctx.language_screen().select(NewsLanguage::De).unwrap();
        ctx.privacy_screen().set_private(true).unwrap();
    }

    let database = Database::open(&path).unwrap();
    let source = news();
    let ctx = context(database.settings_store(), source.clone());

    assert_eq!(ctx.theme.preference(), ThemePreference::Dark);
    assert!(ctx.palette().is_dark());
    assert!(ctx.preferences.privacy().is_private);

    let mut search = ctx.search_screen();
    search.query = "elections".into();
    assert!(search.submit());
    assert!(matches!(search.feed().settled().await, LoadState::Loaded(_)));
    assert_eq!(source.requests.lock().unwrap()[0], NewsRequest::search("elections", NewsLanguage::De, 20));
}

#[tokio::test]
async fn test_unconfigured_backend_reports_login_failure() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let ctx = AppContext::with_store(&config, Arc::new(MemoryStore::new()));
    let mut nav = Navigator::new(Route::Login);

    let mut login = ctx.login_screen();
    login.email = "ann@example.com".into();
    login.password = "secret".into();

    assert!(login.submit(&mut nav).await.is_err());
    assert_eq!(nav.current(), &Route::Login);
    assert!(ctx.sessions.load().unwrap().is_none());
}
