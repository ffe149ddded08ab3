//! Handler for shortening form submissions.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};
use validator::Validate;

use crate::api::dto::form::ShortenForm;
use crate::domain::{SubmissionState, Theme};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::form_id::generate_form_id;
use crate::utils::origin::origin_from_headers;
use crate::web::pages::IndexPage;

/// Runs one submission of the shortening form and renders the outcome.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`)
///
/// # Request Flow
///
/// 1. Reject an empty `url` with `422`, rendering the idle form (no backend call)
/// 2. Resolve the public origin (configured, or from `Host`)
/// 3. Claim the form instance id; a duplicate in-flight submission gets the
///    form back in the submitting state with `409` and a refresh back to `/`
///    (no backend call)
/// 4. Issue exactly one backend request on a spawned task and render the
///    success or failure state. The task keeps the claim until the backend
///    answers, even if the client disconnects first.
///
/// The rendered page carries a fresh form instance id and the submitted URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no public origin is configured and the
/// `Host` header is missing or invalid, and [`AppError::Internal`] if the
/// submission task panics.
pub async fn submit_handler(
    State(state): State<AppState>,
    theme: Theme,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    if form.validate().is_err() {
        debug!("Empty submission rejected");
        let page = IndexPage::new(theme, form.url, generate_form_id(), &SubmissionState::Idle);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    }

    let origin = match &state.public_origin {
        Some(origin) => origin.to_string(),
        None => origin_from_headers(&headers, state.behind_proxy)?,
    };

    let form_id = if form.form_id.is_empty() {
        generate_form_id()
    } else {
        form.form_id
    };

    let Some(guard) = state.in_flight.try_acquire(&form_id) else {
        warn!(form_id = %form_id, "Duplicate submission while in flight");
        let page = IndexPage::new(theme, form.url, form_id, &SubmissionState::Submitting)
            .refresh_to_form();
        return Ok((StatusCode::CONFLICT, page).into_response());
    };

    // The backend call and the in-flight claim outlive a dropped connection.
    let service = state.shorten_service.clone();
    let url = form.url.clone();
    let task = tokio::spawn(async move {
        let _guard = guard;
        service.shorten(&url, &origin).await
    });

    let outcome = task.await.map_err(|e| {
        AppError::internal(
            "Submission task failed",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(IndexPage::new(theme, form.url, generate_form_id(), &outcome).into_response())
}
