//! # ShortUrl web
//!
//! Server-rendered front end for a URL shortening API, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - View mode selection, submission state machine, theme
//! - **Application Layer** ([`application`]) - Submission flow and duplicate-submit guard
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the backend API
//! - **API Layer** ([`api`]) - Wire DTOs, health endpoint and middleware
//! - **Web Layer** ([`web`]) - HTML pages for the shortening form
//!
//! ## Behaviour
//!
//! - `GET /` renders the form; any other path redirects to `{API_BASE_URL}{path}`
//! - Submitting the form posts `{"url": ...}` to `{API_BASE_URL}/shorten` and
//!   shows `{origin}/{code}`, or one generic error message on any failure
//! - A cookie-backed light/dark theme toggle
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://api.short.example"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{InFlightRegistry, ShortenService};
    pub use crate::domain::{
        GENERIC_FAILURE_MESSAGE, ShortenApi, ShortenError, SubmissionState, Theme, ViewMode,
    };
    pub use crate::error::AppError;
    pub use crate::infrastructure::backend::HttpShortenApi;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
