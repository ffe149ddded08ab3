//! Drives one form submission through the backend.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::submission::short_link;
use crate::domain::{GENERIC_FAILURE_MESSAGE, ShortenApi, SubmissionState, TransitionError};

/// Service running the shortening flow against a [`ShortenApi`].
///
/// Stateless between submissions: no caching, no retries, no history.
#[derive(Clone)]
pub struct ShortenService {
    api: Arc<dyn ShortenApi>,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(api: Arc<dyn ShortenApi>) -> Self {
        Self { api }
    }

    /// Submits `url` and records the outcome in `state`.
    ///
    /// Exactly one backend request is issued per accepted call. On success
    /// `state` becomes `Succeeded` with `{origin}/{code}`; on any failure it
    /// becomes `Failed` with the generic message.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadySubmitting`] without contacting the
    /// backend if `state` is already `Submitting`.
    pub async fn submit(
        &self,
        state: &mut SubmissionState,
        url: &str,
        origin: &str,
    ) -> Result<(), TransitionError> {
        state.begin()?;

        match self.request_link(url, origin).await {
            Some(link) => state.succeed(link),
            None => state.fail(),
        }
    }

    /// Runs a fresh submission and returns the resulting state.
    pub async fn shorten(&self, url: &str, origin: &str) -> SubmissionState {
        match self.request_link(url, origin).await {
            Some(short_link) => SubmissionState::Succeeded { short_link },
            None => SubmissionState::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            },
        }
    }

    /// Issues one backend request and builds the short link from its code.
    async fn request_link(&self, url: &str, origin: &str) -> Option<String> {
        match self.api.shorten(url).await {
            Ok(code) => {
                info!(code = %code, "URL shortened");
                Some(short_link(origin, &code))
            }
            Err(e) => {
                debug!(error = %e, "Shortening failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockShortenApi, ShortenError};

    const ORIGIN: &str = "https://sho.rt";

    #[tokio::test]
    async fn test_submit_success_builds_link_from_origin() {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok("AbC12".to_string()));

        let service = ShortenService::new(Arc::new(api));
        let mut state = SubmissionState::Failed {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        };

        service
            .submit(&mut state, "https://example.com", ORIGIN)
            .await
            .unwrap();

        assert_eq!(state.short_link(), Some("https://sho.rt/AbC12"));
        assert!(state.error_message().is_none());
    }

    #[tokio::test]
    async fn test_submit_rejected_maps_to_generic_message() {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::Rejected { status: 400 }));

        let service = ShortenService::new(Arc::new(api));
        let mut state = SubmissionState::Succeeded {
            short_link: "https://sho.rt/old".to_string(),
        };

        service
            .submit(&mut state, "not a url", ORIGIN)
            .await
            .unwrap();

        assert_eq!(state.error_message(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(state.short_link().is_none());
    }

    #[tokio::test]
    async fn test_every_rejection_status_yields_same_message() {
        for status in [400u16, 404, 409, 500, 503] {
            let mut api = MockShortenApi::new();
            api.expect_shorten()
                .times(1)
                .returning(move |_| Err(ShortenError::Rejected { status }));

            let service = ShortenService::new(Arc::new(api));
            let state = service.shorten("https://example.com", ORIGIN).await;

            assert_eq!(
                state,
                SubmissionState::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_shorten_success_returns_link_state() {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .times(1)
            .returning(|_| Ok("AbC12".to_string()));

        let service = ShortenService::new(Arc::new(api));
        let state = service.shorten("https://example.com", "https://sho.rt/").await;

        assert_eq!(
            state,
            SubmissionState::Succeeded {
                short_link: "https://sho.rt/AbC12".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_while_submitting_issues_no_request() {
        let mut api = MockShortenApi::new();
        api.expect_shorten().times(0);

        let service = ShortenService::new(Arc::new(api));
        let mut state = SubmissionState::Submitting;

        let result = service
            .submit(&mut state, "https://example.com", ORIGIN)
            .await;

        assert_eq!(result, Err(TransitionError::AlreadySubmitting));
        assert!(state.is_loading());
    }

    #[tokio::test]
    async fn test_url_forwarded_unmodified() {
        let mut api = MockShortenApi::new();
        api.expect_shorten()
            .withf(|url| url == "  example dot com  ")
            .times(1)
            .returning(|_| Ok("x1".to_string()));

        let service = ShortenService::new(Arc::new(api));
        let state = service.shorten("  example dot com  ", ORIGIN).await;

        assert_eq!(state.short_link(), Some("https://sho.rt/x1"));
    }
}
