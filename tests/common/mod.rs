#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shorturl_web::domain::{ShortenApi, ShortenError};
use shorturl_web::routes::app_router;
use shorturl_web::state::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const API_BASE: &str = "https://api.example.com";
pub const ORIGIN: &str = "https://sho.rt";

/// What the stub backend answers to every request.
#[derive(Debug, Clone)]
pub enum Outcome {
    Code(&'static str),
    Status(u16),
}

/// In-memory stand-in for the shortening backend that records every call.
pub struct StubApi {
    outcome: Outcome,
    delay: Duration,
    calls: AtomicUsize,
    finished: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Self::slow(outcome, Duration::ZERO)
    }

    /// Stub that waits `delay` before answering.
    pub fn slow(outcome: Outcome, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            calls: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    /// Requests received, including ones still waiting on `delay`.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests that ran to completion.
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenApi for StubApi {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Code(code) => Ok(code.to_string()),
            Outcome::Status(status) => Err(ShortenError::Rejected { status: *status }),
        }
    }
}

/// State wired to `api`, with a fixed public origin.
pub fn create_test_state(api: Arc<StubApi>) -> AppState {
    AppState::new(api, API_BASE).with_public_origin(Some(ORIGIN))
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, "static")).unwrap()
}

/// Serves the front end over a real socket and returns its base URL.
pub async fn spawn_front_end(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_router(state, "static");
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
