//! Lifecycle of a single shortening form submission.
//!
//! The result of a submission is a sum type rather than a set of independent
//! fields, so a short link and an error message can never be shown together.
//!
//! ```text
//!            submit                 success
//!   Idle ───────────▶ Submitting ───────────▶ Succeeded(link)
//!    ▲                  │   ▲                        │
//!    │                  │   └──────── submit ────────┤
//!    │          failure ▼                            │
//!    │            Failed(msg) ◀──────────────────────┘
//!    └── (initial)      └──── submit ──▶ Submitting
//! ```

use serde::Serialize;
use thiserror::Error;

/// Message shown for every failed submission, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "Não foi possível encurtar a URL. Tente novamente.";

/// Current state of the shortening form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        short_link: String,
    },
    Failed {
        message: String,
    },
}

/// Returned when a transition is not allowed from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("no submission is in flight")]
    NotSubmitting,
}

impl SubmissionState {
    /// Enters `Submitting`, discarding any previous result or error.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadySubmitting`] if a submission is
    /// already in flight; the state is left untouched.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        if self.is_loading() {
            return Err(TransitionError::AlreadySubmitting);
        }
        *self = Self::Submitting;
        Ok(())
    }

    /// Completes the in-flight submission with a short link.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotSubmitting`] outside of `Submitting`.
    pub fn succeed(&mut self, short_link: impl Into<String>) -> Result<(), TransitionError> {
        if !self.is_loading() {
            return Err(TransitionError::NotSubmitting);
        }
        *self = Self::Succeeded {
            short_link: short_link.into(),
        };
        Ok(())
    }

    /// Completes the in-flight submission with the generic failure message.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotSubmitting`] outside of `Submitting`.
    pub fn fail(&mut self) -> Result<(), TransitionError> {
        if !self.is_loading() {
            return Err(TransitionError::NotSubmitting);
        }
        *self = Self::Failed {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        };
        Ok(())
    }

    /// True strictly between `begin` and its completion.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn short_link(&self) -> Option<&str> {
        match self {
            Self::Succeeded { short_link } => Some(short_link),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Builds the displayed short link from the page origin and a backend code.
///
/// The link is always served from the front end's own origin, even though the
/// shortening request itself went to the backend.
pub fn short_link(origin: &str, code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), code)
}
