//! JSON-facing layer: backend wire format, health endpoint and middleware.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for serialization and form input
//! - [`handlers`] - JSON request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
