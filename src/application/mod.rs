//! Application layer services implementing the submission flow.
//!
//! Services consume the domain traits and give HTTP handlers and the CLI a
//! single entry point for running a submission.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Runs one submission against the backend
//! - [`services::in_flight::InFlightRegistry`] - Refuses duplicate submissions of a form

pub mod services;
