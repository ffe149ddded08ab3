//! Data Transfer Objects for the backend API and the shortening form.
//!
//! All DTOs use Serde for serialization and validator for input checks.

pub mod form;
pub mod health;
pub mod shorten;
