//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type SpanFn = fn(&Request<axum::body::Body>) -> Span;

/// Creates a tracing middleware for page and form requests.
///
/// Spans carry the method and path only. The query string is left out so
/// that nothing a user typed into the form ends up in the logs.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/}: finished processing request latency=41 ms status=200
/// INFO request{method=GET path=/AbC12}: finished processing request latency=0 ms status=307
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, SpanFn, (), DefaultOnResponse>
{
    TraceLayer::new_for_http()
        .make_span_with(make_span as SpanFn)
        .on_request(())
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<axum::body::Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}
