//! Domain layer: the decisions the front end makes, free of HTTP plumbing.
//!
//! # Modules
//!
//! - [`view_mode`] - Redirect vs. form selection for a request path
//! - [`submission`] - Submission state machine and short link construction
//! - [`theme`] - Light/dark preference value
//! - [`shortener`] - Remote shortening API contract

pub mod shortener;
pub mod submission;
pub mod theme;
pub mod view_mode;

pub use shortener::{ShortenApi, ShortenError};
pub use submission::{GENERIC_FAILURE_MESSAGE, SubmissionState, TransitionError};
pub use theme::Theme;
pub use view_mode::ViewMode;

#[cfg(test)]
pub use shortener::MockShortenApi;
