//! Test doubles for the storage, platform and HTTP seams

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::base::{AccountApi, Appearance, KeyValueStore, NewsSource};
use crate::error::{AccountError, NewsError};
use crate::models::account::{LoginResponse, UpdateUserRequest, UpdatedUser};
use crate::models::news::{NewsItem, NewsRequest, NewsSourceInfo};
use crate::models::theme::ColorScheme;

/// Store whose every operation fails
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(anyhow!("disk unavailable reading {}", key))
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("disk unavailable writing {}", key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Err(anyhow!("disk unavailable removing {}", key))
    }
}

/// Platform appearance that can change mid-test
pub struct SwitchableAppearance(Mutex<Option<ColorScheme>>);

impl SwitchableAppearance {
    pub fn new(scheme: Option<ColorScheme>) -> Self {
        Self(Mutex::new(scheme))
    }

    pub fn set(&self, scheme: Option<ColorScheme>) {
        *self.0.lock().unwrap() = scheme;
    }
}

impl Appearance for SwitchableAppearance {
    fn color_scheme(&self) -> Option<ColorScheme> {
        *self.0.lock().unwrap()
    }
}

pub fn news_items(count: usize) -> Vec<NewsItem> {
    (0..count)
        .map(|i| NewsItem {
            title: format!("Story {}", i),
            description: Some(format!("Description {}", i)),
            content: None,
            url: format!("https://example.com/{}", i),
            image: None,
            published_at: Some("2025-01-01T08:00:00Z".to_string()),
            source: Some(NewsSourceInfo {
                name: Some("Example".to_string()),
                url: None,
            }),
        })
        .collect()
}

#[derive(Clone)]
pub enum FakeNewsOutcome {
    Items(Vec<NewsItem>),
    MissingArticles,
    /// Never resolves
    Pending,
}

pub struct FakeNews {
    outcome: Mutex<FakeNewsOutcome>,
    requests: Mutex<Vec<NewsRequest>>,
    in_flight: Mutex<Option<mpsc::Sender<()>>>,
    probe: Mutex<Option<mpsc::Receiver<()>>>,
}

/// Resolves once no pending fetch is alive
pub struct InFlightProbe(mpsc::Receiver<()>);

impl InFlightProbe {
    pub async fn closed(mut self) {
        while self.0.recv().await.is_some() {}
    }
}

impl FakeNews {
    pub fn new(outcome: FakeNewsOutcome) -> Self {
        let (tx, rx) = mpsc::channel(1);
        Self {
            outcome: Mutex::new(outcome),
            requests: Mutex::new(Vec::new()),
            in_flight: Mutex::new(Some(tx)),
            probe: Mutex::new(Some(rx)),
        }
    }

    pub fn set_outcome(&self, outcome: FakeNewsOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn requests(&self) -> Vec<NewsRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Call after the pending fetch has started
    pub fn in_flight_probe(&self) -> InFlightProbe {
        self.in_flight.lock().unwrap().take();
        InFlightProbe(self.probe.lock().unwrap().take().expect("probe already taken"))
    }
}

#[async_trait]
impl NewsSource for FakeNews {
    async fn fetch(&self, request: &NewsRequest) -> Result<Vec<NewsItem>, NewsError> {
        self.requests.lock().unwrap().push(request.clone());
        let outcome = self.outcome.lock().unwrap().clone();

        match outcome {
            FakeNewsOutcome::Items(items) => Ok(items),
            FakeNewsOutcome::MissingArticles => Err(NewsError::MissingArticles),
            FakeNewsOutcome::Pending => {
                let guard = self.in_flight.lock().unwrap().clone();
                std::future::pending::<()>().await;
                drop(guard);
                Ok(Vec::new())
            }
        }
    }
}

#[derive(Clone)]
pub enum FakeAccountOutcome {
    Ok,
    Rejected(Option<String>),
    Offline,
}

pub struct FakeAccount {
    pub login_response: LoginResponse,
    outcome: Mutex<FakeAccountOutcome>,
    pub calls: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<(String, UpdateUserRequest)>>,
}

impl FakeAccount {
    pub fn new(login_response: LoginResponse, outcome: FakeAccountOutcome) -> Arc<Self> {
        Arc::new(Self {
            login_response,
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AccountError> {
        match self.outcome.lock().unwrap().clone() {
            FakeAccountOutcome::Ok => Ok(()),
            FakeAccountOutcome::Rejected(message) => Err(AccountError::Rejected { status: 400, message }),
            FakeAccountOutcome::Offline => {
                let decode = serde_json::from_str::<serde_json::Value>("").unwrap_err();
                Err(AccountError::Decode(decode))
            }
        }
    }
}

#[async_trait]
impl AccountApi for FakeAccount {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginResponse, AccountError> {
        self.calls.lock().unwrap().push(format!("login {}", email));
        self.check()?;
        Ok(self.login_response.clone())
    }

    async fn update_user(&self, user_id: &str, update: &UpdateUserRequest) -> Result<UpdatedUser, AccountError> {
        self.calls.lock().unwrap().push(format!("update {}", user_id));
        self.check()?;
        self.updates
            .lock()
            .unwrap()
            .push((user_id.to_string(), update.clone()));
        Ok(UpdatedUser {
            user_id: Some(user_id.to_string()),
            username: Some(update.username.clone()),
            email: Some(update.email.clone()),
        })
    }
}
