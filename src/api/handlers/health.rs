//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports front end status and the backend it forwards to.
///
/// # Endpoint
///
/// `GET /_/health`
///
/// The backend is not contacted: its availability is only observable through
/// submissions, which never surface the cause of a failure.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": { "status": "ok", "message": "https://api.example.com/shorten" },
///     "submissions": { "status": "ok", "message": "In flight: 0" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{}/shorten", state.api_base)),
            },
            submissions: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("In flight: {}", state.in_flight.len())),
            },
        },
    })
}
