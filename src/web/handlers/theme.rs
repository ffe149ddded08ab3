//! Handler for the light/dark toggle.

use axum::{
    http::header,
    response::{IntoResponse, Redirect},
};

use crate::domain::Theme;

/// Flips the theme cookie and sends the browser back to the form.
///
/// # Endpoint
///
/// `POST /_/theme`
///
/// Responds with `303 See Other` to `/` and a `Set-Cookie` header carrying
/// the new preference.
pub async fn toggle_theme_handler(theme: Theme) -> impl IntoResponse {
    let next = theme.toggled();

    (
        [(header::SET_COOKIE, next.to_set_cookie())],
        Redirect::to("/"),
    )
}
