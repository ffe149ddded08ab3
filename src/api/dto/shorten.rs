//! Wire format of the remote shortening API.

use serde::{Deserialize, Serialize};

/// Body of `POST {API_BASE}/shorten`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenRequest {
    /// The long URL exactly as the user entered it.
    pub url: String,
}

/// Successful response of the shortening API.
///
/// Only `code` is read; any other fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub code: String,
}
