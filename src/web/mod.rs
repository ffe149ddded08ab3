//! Browser-facing layer: server-rendered pages for the shortening form.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`extract`] - Request extractors (theme preference)
//! - [`handlers`] - Page and form handlers
//! - [`pages`] - Template definitions
//! - [`routes`] - Page route configuration

pub mod extract;
pub mod handlers;
pub mod pages;
pub mod routes;
