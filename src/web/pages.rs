//! Askama templates rendered by the page handlers.

use askama::Template;
use askama_web::WebTemplate;

use crate::domain::{SubmissionState, Theme};

/// The shortening form, in any submission state.
///
/// Renders `templates/index.html` with:
/// - Theme toggle
/// - URL input and submit button (disabled while submitting)
/// - Either the short link or the error message, never both
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub theme: &'static str,
    pub dark: bool,
    pub input: String,
    pub form_id: String,
    pub loading: bool,
    pub short_link: Option<String>,
    pub error: Option<String>,
    /// Seconds before the page reloads the blank form, if set.
    pub refresh_after: Option<u32>,
}

/// Delay before a refused duplicate submission returns to the form.
pub const DUPLICATE_REFRESH_SECS: u32 = 3;

impl IndexPage {
    pub fn new(theme: Theme, input: String, form_id: String, state: &SubmissionState) -> Self {
        Self {
            theme: theme.as_str(),
            dark: theme.is_dark(),
            input,
            form_id,
            loading: state.is_loading(),
            short_link: state.short_link().map(str::to_string),
            error: state.error_message().map(str::to_string),
            refresh_after: None,
        }
    }

    /// Sends the browser back to a fresh form after a short delay.
    pub fn refresh_to_form(mut self) -> Self {
        self.refresh_after = Some(DUPLICATE_REFRESH_SECS);
        self
    }
}

/// Transient indicator shown while the browser follows a redirect.
///
/// Renders `templates/redirecting.html`; a meta refresh repeats the
/// navigation for clients that ignore the `Location` header.
#[derive(Template, WebTemplate)]
#[template(path = "redirecting.html")]
pub struct RedirectingPage {
    pub theme: &'static str,
    pub dark: bool,
    pub target: String,
}

impl RedirectingPage {
    pub fn new(theme: Theme, target: String) -> Self {
        Self {
            theme: theme.as_str(),
            dark: theme.is_dark(),
            target,
        }
    }
}
