use std::sync::Arc;

use crate::base::NewsSource;
use crate::models::news::{NewsItem, NewsRequest, Topic};
use crate::models::theme::Palette;
use crate::services::{PreferencesService, ThemeAccess};
use crate::ui::navigation::{Navigator, Route};
use crate::ui::screens::feed::{LoadState, NewsFeed};

pub const HEADLINE_COUNT: u32 = 10;
pub const SEARCH_RESULT_COUNT: u32 = 20;
pub const FEATURED_COUNT: usize = 3;
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const NO_NEWS_MESSAGE: &str = "No news right now.";

/// Home tab: top headlines, with the first few featured
pub struct HomeScreen {
    feed: NewsFeed,
    theme: Arc<dyn ThemeAccess>,
    preferences: PreferencesService,
}

impl HomeScreen {
    pub const GREETING: &'static str = "Good Day";
    pub const SUBTITLE: &'static str = "Catch up with the latest news";

    pub fn new(source: Arc<dyn NewsSource>, theme: Arc<dyn ThemeAccess>, preferences: PreferencesService) -> Self {
        Self {
            feed: NewsFeed::new(source),
            theme,
            preferences,
        }
    }

    pub fn open(&mut self) {
        let request = NewsRequest::top_headlines(self.preferences.language(), HEADLINE_COUNT);
        self.feed.load(request);
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }

    pub fn state(&self) -> LoadState {
        self.feed.state()
    }

    pub fn featured(&self) -> Vec<NewsItem> {
        self.state().items().iter().take(FEATURED_COUNT).cloned().collect()
    }

    pub fn latest(&self) -> Vec<NewsItem> {
        self.state().items().to_vec()
    }
}

/// A browsable news category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
}

impl Category {
    pub fn slug(&self) -> String {
        category_slug(self.name)
    }
}

pub const CATEGORIES: [Category; 8] = [
    Category { name: "Top Stories" },
    Category { name: "Technology" },
    Category { name: "Business" },
    Category { name: "Sports" },
    Category { name: "Entertainment" },
    Category { name: "Health" },
    Category { name: "Science" },
    Category { name: "Politics" },
];

/// "Top Stories" -> "top-stories"
pub fn category_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// "top-stories" -> "Top Stories"
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Categories tab
pub struct CategoriesScreen {
    theme: Arc<dyn ThemeAccess>,
}

impl CategoriesScreen {
    pub fn new(theme: Arc<dyn ThemeAccess>) -> Self {
        Self { theme }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    /// Opens the detail view for `name`; unknown names are ignored
    pub fn select(&self, name: &str, nav: &mut Navigator) -> bool {
        match CATEGORIES.iter().find(|c| c.name.eq_ignore_ascii_case(name) || c.slug() == name) {
            Some(category) => {
                nav.push(Route::Category(category.slug()));
                true
            }
            None => false,
        }
    }
}

/// Headlines for one category
pub struct CategoryScreen {
    slug: String,
    feed: NewsFeed,
    theme: Arc<dyn ThemeAccess>,
    preferences: PreferencesService,
}

impl CategoryScreen {
    pub fn new(
        slug: impl Into<String>,
        source: Arc<dyn NewsSource>,
        theme: Arc<dyn ThemeAccess>,
        preferences: PreferencesService,
    ) -> Self {
        Self {
            slug: slug.into(),
            feed: NewsFeed::new(source),
            theme,
            preferences,
        }
    }

    pub fn title(&self) -> String {
        format!("{} News", title_case_slug(&self.slug))
    }

    pub fn topic(&self) -> Topic {
        Topic::from_category_slug(&self.slug)
    }

    pub fn open(&mut self) {
        let request = NewsRequest::topic(self.topic(), self.preferences.language(), HEADLINE_COUNT);
        self.feed.load(request);
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }

    pub fn state(&self) -> LoadState {
        self.feed.state()
    }
}

/// Search tab. Nothing is fetched until a non-blank query is submitted.
pub struct SearchScreen {
    pub query: String,
    feed: NewsFeed,
    theme: Arc<dyn ThemeAccess>,
    preferences: PreferencesService,
}

impl SearchScreen {
    pub fn new(source: Arc<dyn NewsSource>, theme: Arc<dyn ThemeAccess>, preferences: PreferencesService) -> Self {
        Self {
            query: String::new(),
            feed: NewsFeed::new(source),
            theme,
            preferences,
        }
    }

    /// Returns false when the query is blank and nothing was requested
    pub fn submit(&mut self) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return false;
        }

        let request = NewsRequest::search(query, self.preferences.language(), SEARCH_RESULT_COUNT);
        self.feed.load(request);
        true
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }

    pub fn state(&self) -> LoadState {
        self.feed.state()
    }
}
