//! `reqwest`-backed client for the remote shortening API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::{ShortenApi, ShortenError};

/// Calls `POST {API_BASE}/shorten` with a JSON body `{"url": ...}`.
///
/// No retries and no timeout: a request, once issued, runs to completion.
#[derive(Debug, Clone)]
pub struct HttpShortenApi {
    client: Client,
    endpoint: Url,
}

impl HttpShortenApi {
    /// Creates a client for the backend rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `{api_base}/shorten` is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(api_base: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!("{}/shorten", api_base.trim_end_matches('/')))
            .with_context(|| format!("Invalid API base URL '{api_base}'"))?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Full URL that shortening requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ShortenApi for HttpShortenApi {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        debug!(endpoint = %self.endpoint, "Posting shorten request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ShortenRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(ShortenError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: ShortenResponse = response.json().await.map_err(ShortenError::InvalidBody)?;

        Ok(body.code)
    }
}
