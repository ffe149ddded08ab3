//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{InFlightRegistry, ShortenService};
use crate::domain::ShortenApi;

/// Application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: ShortenService,
    pub in_flight: InFlightRegistry,
    /// Backend base URL without a trailing slash.
    pub api_base: Arc<str>,
    /// Fixed origin for short links; derived from each request when `None`.
    pub public_origin: Option<Arc<str>>,
    /// Trust `X-Forwarded-Proto` when deriving the origin.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(api: Arc<dyn ShortenApi>, api_base: &str) -> Self {
        Self {
            shorten_service: ShortenService::new(api),
            in_flight: InFlightRegistry::new(),
            api_base: Arc::from(api_base.trim_end_matches('/')),
            public_origin: None,
            behind_proxy: false,
        }
    }

    pub fn with_public_origin(mut self, origin: Option<&str>) -> Self {
        self.public_origin = origin.map(|o| Arc::from(o.trim_end_matches('/')));
        self
    }

    pub fn with_behind_proxy(mut self, behind_proxy: bool) -> Self {
        self.behind_proxy = behind_proxy;
        self
    }
}
