//! Entry point for every page request.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::domain::view_mode::{self, ViewMode};
use crate::domain::{SubmissionState, Theme};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::form_id::generate_form_id;
use crate::web::pages::{IndexPage, RedirectingPage};

/// Serves the form or forwards the browser to the backend.
///
/// # Endpoints
///
/// - `GET /` - Form mode: the empty shortening form
/// - `GET /{*path}` - Redirect mode: `307` to `{API_BASE}{path}`
///
/// The decision is made by [`view_mode::resolve`] on the raw request path,
/// query string excluded. In redirect mode the form is never rendered; the
/// body is a short "redirecting" page and the navigation is the response's
/// single `Location` header.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the target cannot be expressed as a
/// `Location` header value.
pub async fn view_handler(
    State(state): State<AppState>,
    theme: Theme,
    uri: Uri,
) -> Result<Response, AppError> {
    match view_mode::resolve(uri.path(), &state.api_base) {
        ViewMode::Form => Ok(IndexPage::new(
            theme,
            String::new(),
            generate_form_id(),
            &SubmissionState::Idle,
        )
        .into_response()),
        ViewMode::Redirect { target } => {
            debug!(path = %uri.path(), "Forwarding to backend");

            let location = HeaderValue::from_str(&target).map_err(|_| {
                AppError::internal("Invalid redirect target", json!({ "path": uri.path() }))
            })?;

            Ok((
                StatusCode::TEMPORARY_REDIRECT,
                [(header::LOCATION, location)],
                RedirectingPage::new(theme, target),
            )
                .into_response())
        }
    }
}
