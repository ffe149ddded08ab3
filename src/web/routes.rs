//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{submit_handler, toggle_theme_handler, view_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Routes serving the form and short-code redirects.
///
/// # Endpoints
///
/// - `GET  /`          - Shortening form
/// - `POST /`          - Form submission
/// - `GET  /{*path}`   - Redirect to the backend for any other path
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(view_handler).post(submit_handler))
        .route("/{*path}", get(view_handler))
}

/// Front end endpoints, nested under the reserved `/_` prefix.
///
/// # Endpoints
///
/// - `POST /theme` - Toggle the theme cookie
pub fn internal_routes() -> Router<AppState> {
    Router::new().route("/theme", post(toggle_theme_handler))
}
