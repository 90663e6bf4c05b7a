use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown in place of a missing article image
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Publisher attached to an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSourceInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// GNews sometimes sends `null` for fields that are normally strings
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An article as returned by GNews. Read-only and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Kept as the raw string so one malformed timestamp doesn't sink the whole response
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: Option<NewsSourceInfo>,
}

impl NewsItem {
    pub fn source_name(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Publication time in local time, or the raw value if it can't be parsed
    pub fn published_label(&self) -> String {
        match self.published() {
            Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            None => self.published_at.clone().unwrap_or_default(),
        }
    }
}

/// GNews topic accepted by the top-headlines endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    General,
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::General => "general",
            Topic::World => "world",
            Topic::Nation => "nation",
            Topic::Business => "business",
            Topic::Technology => "technology",
            Topic::Entertainment => "entertainment",
            Topic::Sports => "sports",
            Topic::Science => "science",
            Topic::Health => "health",
        }
    }

    /// Maps a category slug to the closest GNews topic.
    ///
    /// GNews has no politics topic, so politics maps to world. Unknown slugs
    /// fall back to general.
    pub fn from_category_slug(slug: &str) -> Self {
        match slug {
            "top-stories" => Topic::General,
            "technology" => Topic::Technology,
            "business" => Topic::Business,
            "sports" => Topic::Sports,
            "entertainment" => Topic::Entertainment,
            "health" => Topic::Health,
            "science" => Topic::Science,
            "politics" => Topic::World,
            _ => Topic::General,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages GNews serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsLanguage {
    #[default]
    En,
    Fr,
    Es,
    De,
    It,
    Pt,
}

impl NewsLanguage {
    pub const ALL: [NewsLanguage; 6] = [
        NewsLanguage::En,
        NewsLanguage::Fr,
        NewsLanguage::Es,
        NewsLanguage::De,
        NewsLanguage::It,
        NewsLanguage::Pt,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            NewsLanguage::En => "en",
            NewsLanguage::Fr => "fr",
            NewsLanguage::Es => "es",
            NewsLanguage::De => "de",
            NewsLanguage::It => "it",
            NewsLanguage::Pt => "pt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsLanguage::En => "English",
            NewsLanguage::Fr => "French",
            NewsLanguage::Es => "Spanish",
            NewsLanguage::De => "German",
            NewsLanguage::It => "Italian",
            NewsLanguage::Pt => "Portuguese",
        }
    }
}

impl FromStr for NewsLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NewsLanguage::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| anyhow::anyhow!("Unsupported news language: {}", s))
    }
}

/// Which GNews endpoint a request targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsEndpoint {
    TopHeadlines { topic: Option<Topic> },
    Search { query: String },
}

/// A single news request issued by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRequest {
    pub endpoint: NewsEndpoint,
    pub lang: NewsLanguage,
    pub max: u32,
}

impl NewsRequest {
    pub fn top_headlines(lang: NewsLanguage, max: u32) -> Self {
        Self {
            endpoint: NewsEndpoint::TopHeadlines { topic: None },
            lang,
            max,
        }
    }

    pub fn topic(topic: Topic, lang: NewsLanguage, max: u32) -> Self {
        Self {
            endpoint: NewsEndpoint::TopHeadlines { topic: Some(topic) },
            lang,
            max,
        }
    }

    pub fn search(query: impl Into<String>, lang: NewsLanguage, max: u32) -> Self {
        Self {
            endpoint: NewsEndpoint::Search { query: query.into() },
            lang,
            max,
        }
    }
}
