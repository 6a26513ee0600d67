pub mod api;
pub mod error;
pub mod mutation;
pub mod query;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::{HttpApi, SocialApi};
pub use error::{ApiError, Result};
pub use mutation::MutationState;
pub use query::{Notice, Query, QueryCache, QueryClient, QueryKey, QueryStatus};

pub mod client {
    use reqwest::{Client, Response};
    use serde::Deserialize;
    use lingo_common::{FriendRequest, Url, User, UserId};
    use tracing::debug;
    use crate::error::{ApiError, Result};

    pub async fn get_user_friends(client: &Client, base: &Url) -> Result<Vec<User>> {
        Ok(checked(client.get(endpoint(base, "/users/friends"))
            .send()
            .await?)
            .await?
            .json::<_>()
            .await?)
    }
    pub async fn get_recommended_users(client: &Client, base: &Url) -> Result<Vec<User>> {
        Ok(checked(client.get(endpoint(base, "/users"))
            .send()
            .await?)
            .await?
            .json::<_>()
            .await?)
    }
    pub async fn get_outgoing_friend_reqs(client: &Client, base: &Url) -> Result<Vec<FriendRequest>> {
        Ok(checked(client.get(endpoint(base, "/users/outgoing-friend-requests"))
            .send()
            .await?)
            .await?
            .json::<_>()
            .await?)
    }
    pub async fn send_friend_request(client: &Client, base: &Url, user: impl AsRef<UserId>) -> Result<()> {
        let url = endpoint(base, &(String::from("/users/friend-request/") + user.as_ref().as_str()));
        checked(client.post(url)
            .send()
            .await?)
            .await?;
        Ok(())
    }

    pub fn endpoint(base: &Url, path: &str) -> String {
        String::from(base.as_str().trim_end_matches('/')) + path
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    async fn checked(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        debug!(%status, url = %response.url(), "request rejected");
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
        };
        Err(ApiError::Status { status: status.as_u16(), message })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn endpoint_joins_without_double_slash() {
            let base = Url("http://localhost:5001/api/".to_string());
            assert_eq!(endpoint(&base, "/users"), "http://localhost:5001/api/users");
            let base = Url("http://localhost:5001/api".to_string());
            assert_eq!(endpoint(&base, "/users/friends"), "http://localhost:5001/api/users/friends");
        }
    }
}
