use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::base::AccountApi;
use crate::error::AccountError;
use crate::models::account::{LoginRequest, LoginResponse, UpdateUserRequest, UpdatedUser};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the user-account backend
pub struct AccountClient {
    client: reqwest::Client,
    base_url: Url,
}

impl AccountClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// `{base}/api/users/{segments...}`
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, AccountError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AccountError::InvalidRequest(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "users"])
            .extend(segments);
        Ok(url)
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AccountError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

#[async_trait]
impl AccountApi for AccountClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AccountError> {
        let url = self.endpoint(&["login"])?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        Self::read(response).await
    }

    async fn update_user(&self, user_id: &str, update: &UpdateUserRequest) -> Result<UpdatedUser, AccountError> {
        if user_id.is_empty() {
            return Err(AccountError::InvalidRequest("missing user id".to_string()));
        }

        let url = self.endpoint(&[user_id])?;
        debug!("PUT {}", url);

        let response = self.client.put(url).json(update).send().await?;
        Self::read(response).await
    }
}

/// Decodes a 2xx body as `T`; anything else becomes `Rejected` with the
/// server's `message` if the body has one.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AccountError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }

    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
    warn!("Account API answered {}: {}", status, message.as_deref().unwrap_or("<no message>"));
    Err(AccountError::Rejected { status, message })
}
