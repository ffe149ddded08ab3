//! Contract for the remote shortening API.

use async_trait::async_trait;
use thiserror::Error;

/// Reasons a shortening request did not produce a code.
///
/// Callers surface every variant to users as the same generic message; the
/// distinction only exists for logs and tests.
#[derive(Debug, Error)]
pub enum ShortenError {
    /// The backend answered with a non-success status.
    #[error("backend rejected the request with status {status}")]
    Rejected { status: u16 },

    /// The request never produced a response.
    #[error("request to backend failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not the expected JSON object.
    #[error("backend response could not be decoded: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// Remote service that turns a long URL into a short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpShortenApi`] - `POST {API_BASE}/shorten` over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenApi: Send + Sync {
    /// Submits `url` as-is and returns the backend-assigned short code.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError`] on a non-2xx status, a transport failure or
    /// an undecodable body.
    async fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}
