use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, error};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::base::NewsSource;
use crate::models::news::{NewsItem, NewsRequest};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch news";

/// Load state shared by every screen that shows remote news
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Vec<NewsItem>),
    /// The request succeeded but returned no articles
    Empty,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn items(&self) -> &[NewsItem] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// A spawned fetch that is aborted when dropped
pub struct ScreenTask(JoinHandle<()>);

impl ScreenTask {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for ScreenTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs one news request at a time on behalf of a screen.
///
/// Starting a new load aborts the previous one, and dropping the feed aborts
/// whatever is still in flight. Results of superseded loads are discarded.
pub struct NewsFeed {
    source: Arc<dyn NewsSource>,
    state: Arc<watch::Sender<LoadState>>,
    generation: Arc<AtomicU64>,
    task: Option<ScreenTask>,
}

impl NewsFeed {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            source,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Starts `request`. Must be called from within a tokio runtime.
    pub fn load(&mut self, request: NewsRequest) {
        self.task = None;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LoadState::Loading);

        let source = self.source.clone();
        let state = self.state.clone();
        let current = self.generation.clone();

        let handle = tokio::spawn(async move {
            let next = match source.fetch(&request).await {
                Ok(items) if items.is_empty() => LoadState::Empty,
                Ok(items) => LoadState::Loaded(items),
                Err(e) => {
                    error!("Failed to load news: {}", e);
                    LoadState::Failed(FETCH_FAILED_MESSAGE.to_string())
                }
            };

            state.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    debug!("Discarding result of superseded load {}", generation);
                    return false;
                }
                *slot = next;
                true
            });
        });

        self.task = Some(ScreenTask(handle));
    }

    /// Aborts the in-flight load, if any, and returns to idle
    pub fn cancel(&mut self) {
        if self.task.take().is_some() {
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.state.send_replace(LoadState::Idle);
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Waits until the current load finishes
    pub async fn settled(&self) -> LoadState {
        let mut rx = self.state.subscribe();
        let settled = rx.wait_for(|state| !state.is_loading()).await.map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state())
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }
}
