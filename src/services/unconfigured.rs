use async_trait::async_trait;

use crate::base::{AccountApi, NewsSource};
use crate::error::{AccountError, NewsError};
use crate::models::account::{LoginResponse, UpdateUserRequest, UpdatedUser};
use crate::models::news::{NewsItem, NewsRequest};

/// Stands in for a collaborator whose endpoint or key isn't configured
#[derive(Debug, Clone, Copy)]
pub struct Unconfigured {
    pub setting: &'static str,
}

impl Unconfigured {
    fn message(&self) -> String {
        format!("{} is not set", self.setting)
    }
}

#[async_trait]
impl NewsSource for Unconfigured {
    async fn fetch(&self, _request: &NewsRequest) -> Result<Vec<NewsItem>, NewsError> {
        Err(NewsError::InvalidRequest(self.message()))
    }
}

#[async_trait]
impl AccountApi for Unconfigured {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, AccountError> {
        Err(AccountError::InvalidRequest(self.message()))
    }

    async fn update_user(&self, _user_id: &str, _update: &UpdateUserRequest) -> Result<UpdatedUser, AccountError> {
        Err(AccountError::InvalidRequest(self.message()))
    }
}
