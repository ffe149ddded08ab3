//! Shortening form submission.

use serde::Deserialize;
use validator::Validate;

/// Fields posted by the shortening form.
///
/// Only presence of `url` is checked; its syntax is left to the backend.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Instance id of the rendered form, used to refuse duplicate submissions.
    #[serde(default)]
    pub form_id: String,
}
