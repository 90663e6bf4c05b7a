use async_trait::async_trait;
use log::{debug, error};
use serde::Deserialize;
use url::Url;

use crate::base::NewsSource;
use crate::error::NewsError;
use crate::models::news::{NewsEndpoint, NewsItem, NewsRequest};

pub const DEFAULT_GNEWS_BASE_URL: &str = "https://gnews.io/api/v4";

#[derive(Debug, Deserialize)]
struct GNewsResponse {
    #[serde(default)]
    articles: Option<Vec<NewsItem>>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Client for the GNews REST API
pub struct GNewsClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl GNewsClient {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Builds the full request URL, token included
    pub fn request_url(&self, request: &NewsRequest) -> Result<Url, NewsError> {
        let path = match &request.endpoint {
            NewsEndpoint::TopHeadlines { .. } => "top-headlines",
            NewsEndpoint::Search { .. } => "search",
        };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NewsError::InvalidRequest(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .push(path);

        {
            let mut query = url.query_pairs_mut();
            match &request.endpoint {
                NewsEndpoint::TopHeadlines { topic } => {
                    query
                        .append_pair("token", &self.api_key)
                        .append_pair("lang", request.lang.code())
                        .append_pair("max", &request.max.to_string());
                    if let Some(topic) = topic {
                        query.append_pair("topic", topic.as_str());
                    }
                }
                NewsEndpoint::Search { query: text } => {
                    query
                        .append_pair("q", text)
                        .append_pair("token", &self.api_key)
                        .append_pair("lang", request.lang.code())
                        .append_pair("max", &request.max.to_string());
                }
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl NewsSource for GNewsClient {
    async fn fetch(&self, request: &NewsRequest) -> Result<Vec<NewsItem>, NewsError> {
        let url = self.request_url(request)?;
        debug!("Fetching {} ({:?}, max {})", url.path(), request.lang, request.max);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let result = parse_response(status, &body);
        if let Err(e) = &result {
            error!("News request failed: {}", e);
        }
        result
    }
}

/// Classifies a GNews response body.
///
/// An `articles` array (possibly empty) is a success. A body without one is
/// always an error, so an empty screen is never shown for a failed call.
pub fn parse_response(status: u16, body: &str) -> Result<Vec<NewsItem>, NewsError> {
    let success = (200..300).contains(&status);

    let parsed: GNewsResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !success => {
            return Err(NewsError::Api {
                status,
                message: body.trim().chars().take(200).collect(),
            })
        }
        Err(e) => return Err(NewsError::Decode(e)),
    };

    if let Some(articles) = parsed.articles {
        return Ok(articles);
    }

    match parsed.errors {
        Some(errors) => Err(NewsError::Api {
            status,
            message: flatten_errors(&errors),
        }),
        None if !success => Err(NewsError::Api {
            status,
            message: format!("HTTP {}", status),
        }),
        None => Err(NewsError::MissingArticles),
    }
}

/// GNews reports errors either as a list of strings or as an object of them
fn flatten_errors(errors: &serde_json::Value) -> String {
    match errors {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items.iter().map(flatten_errors).collect::<Vec<_>>().join("; "),
        serde_json::Value::Object(map) => map.values().map(flatten_errors).collect::<Vec<_>>().join("; "),
        other => other.to_string(),
    }
}
