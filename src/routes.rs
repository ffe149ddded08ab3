//! Top-level router combining page, health and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Shortening form (public)
//! - `POST /`             - Form submission (public)
//! - `GET  /{*path}`      - Redirect to the backend (public)
//! - `POST /_/theme`      - Theme toggle
//! - `GET  /_/health`     - Health check
//! - `/_/static/*`        - Static assets
//!
//! Everything under `/_` is owned by the front end and never forwarded.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing as trace_mw;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Prefix reserved for the front end's own endpoints.
pub const INTERNAL_PREFIX: &str = "/_";

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/_/static`
pub fn app_router(state: AppState, static_dir: &str) -> Router {
    let internal = web::routes::internal_routes()
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir));

    Router::new()
        .merge(web::routes::page_routes())
        .nest(INTERNAL_PREFIX, internal)
        .with_state(state)
        .layer(trace_mw::layer())
}
