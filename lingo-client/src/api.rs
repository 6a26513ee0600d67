use async_trait::async_trait;
use reqwest::Client;
use lingo_common::{FriendRequest, Url, User, UserId};
use crate::client;
use crate::error::{ApiError, Result};

/// The four backend operations the home page depends on.
#[async_trait]
pub trait SocialApi: Send + Sync + 'static {
    async fn get_user_friends(&self) -> Result<Vec<User>>;
    async fn get_recommended_users(&self) -> Result<Vec<User>>;
    async fn get_outgoing_friend_reqs(&self) -> Result<Vec<FriendRequest>>;
    async fn send_friend_request(&self, user: &UserId) -> Result<()>;
}

/// `SocialApi` over HTTP against a base url such as `http://localhost:5001/api`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        match reqwest::Url::parse(&base) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self { client, base: Url(base) }),
            _ => Err(ApiError::InvalidBaseUrl(base)),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl SocialApi for HttpApi {
    async fn get_user_friends(&self) -> Result<Vec<User>> {
        client::get_user_friends(&self.client, &self.base).await
    }
    async fn get_recommended_users(&self) -> Result<Vec<User>> {
        client::get_recommended_users(&self.client, &self.base).await
    }
    async fn get_outgoing_friend_reqs(&self) -> Result<Vec<FriendRequest>> {
        client::get_outgoing_friend_reqs(&self.client, &self.base).await
    }
    async fn send_friend_request(&self, user: &UserId) -> Result<()> {
        client::send_friend_request(&self.client, &self.base, user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_base() {
        assert!(matches!(HttpApi::new("not a url"), Err(ApiError::InvalidBaseUrl(_))));
        assert!(matches!(HttpApi::new("ftp://host/api"), Err(ApiError::InvalidBaseUrl(_))));
        assert_eq!(HttpApi::new("http://localhost:5001/api").unwrap().base().as_str(), "http://localhost:5001/api");
    }
}
