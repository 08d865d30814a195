//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for every route, pages and API alike.
///
/// Each request runs inside an `INFO` span carrying method, URI (including
/// path ids) and HTTP version, so errors logged by services and repositories
/// are tied to the route that triggered them.
///
/// - request start is logged at `DEBUG`
/// - every response is logged at `INFO` with status and latency in ms
/// - 5xx responses are additionally logged at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/comicPage/3 version=HTTP/1.1}: finished processing request latency=4 ms status=200
/// ERROR request{method=GET uri=/ version=HTTP/1.1}: Database error error=pool timed out while waiting for an open connection
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
