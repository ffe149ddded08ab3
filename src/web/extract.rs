//! Request extractors for page handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::domain::Theme;

/// Reads the theme preference from the `theme` cookie.
///
/// The first `Cookie` header carrying a valid `theme` cookie wins. Never
/// rejects: a missing or unknown cookie yields the default theme.
impl<S> FromRequestParts<S> for Theme
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let theme = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(Theme::find_in_cookie_header)
            .unwrap_or_default();

        Ok(theme)
    }
}
