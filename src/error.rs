use thiserror::Error;

/// Errors surfaced to the user by a screen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A required field is missing or malformed; raised before any request
    #[error("{0}")]
    Validation(String),
    /// The request never produced a usable response
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("{0}")]
    Business(String),
    /// Local storage could not be read or written
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(m)
            | AppError::Transport(m)
            | AppError::Business(m)
            | AppError::Storage(m) => m,
        }
    }
}

/// Failure of a single news request
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode news response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("news API rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("news response has no articles field")]
    MissingArticles,
    #[error("invalid news request: {0}")]
    InvalidRequest(String),
}

/// Failure of an account API call
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode account response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Non-2xx answer; carries the server's `message` when it sent one
    #[error("account API rejected the request ({status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("invalid account request: {0}")]
    InvalidRequest(String),
}

impl AccountError {
    /// Maps to what the user sees, using `fallback` when the server gave no message
    pub fn into_app_error(self, fallback: &str) -> AppError {
        match self {
            AccountError::Rejected { message, .. } => {
                AppError::Business(message.filter(|m| !m.is_empty()).unwrap_or_else(|| fallback.to_string()))
            }
            AccountError::Transport(_) | AccountError::Decode(_) => AppError::Transport("Network error".to_string()),
            AccountError::InvalidRequest(m) => AppError::Validation(m),
        }
    }
}
