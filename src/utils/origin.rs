//! Public origin of the front end, as seen by the browser.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Derives `scheme://host[:port]` from the request headers.
///
/// The host is taken verbatim from the `Host` header, port included, since
/// the short link must point back at this exact origin. The scheme is
/// `http` unless `trust_forwarded` is set and `X-Forwarded-Proto` says
/// otherwise (first value wins when the proxy chain appended several).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// assert_eq!(origin_from_headers(&headers, false).unwrap(), "http://sho.rt:8080");
/// ```
pub fn origin_from_headers(headers: &HeaderMap, trust_forwarded: bool) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let scheme = if trust_forwarded {
        headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|proto| matches!(*proto, "http" | "https"))
            .unwrap_or("http")
    } else {
        "http"
    };

    Ok(format!("{scheme}://{host}"))
}
