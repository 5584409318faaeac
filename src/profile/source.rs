//! Upstream profile endpoint client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::UpdateProfileRequest;
use crate::profile::UserProfile;

/// Header naming the user whose profile is requested.
pub const USER_ID_HEADER: &str = "x-user-id";

// == Profile Source ==
/// Where profiles come from when the cache cannot answer.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Reads the current profile of `user_id`.
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, FetchError>;

    /// Writes `update` for `user_id` and returns the stored profile.
    async fn update_profile(
        &self,
        user_id: &str,
        update: &UpdateProfileRequest,
    ) -> Result<UserProfile, FetchError>;
}

// == HTTP Profile Source ==
/// [`ProfileSource`] backed by the reporting application's `/api/profile`.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpProfileSource {
    /// Creates a client for `{base_url}/api/profile`.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/profile", base_url.trim_end_matches('/')),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            &config.profile_api_url,
            config.profile_api_token.clone(),
            config.profile_api_timeout_duration(),
        )
    }

    /// Full URL of the profile endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, user_id: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, &self.endpoint)
            .header(USER_ID_HEADER, user_id);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, FetchError> {
        debug!(user_id, endpoint = %self.endpoint, "fetching profile from upstream");
        let response = self.request(Method::GET, user_id).send().await?;
        read_profile(response).await
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: &UpdateProfileRequest,
    ) -> Result<UserProfile, FetchError> {
        debug!(user_id, endpoint = %self.endpoint, "updating profile upstream");
        let response = self
            .request(Method::PUT, user_id)
            .json(update)
            .send()
            .await?;
        read_profile(response).await
    }
}

/// Decodes a profile from a 2xx response; any other status is an error.
async fn read_profile(response: Response) -> Result<UserProfile, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
}
