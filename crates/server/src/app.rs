//! Router assembly.

use axum::{Router, body::Body, http::Request, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;

use crate::{middleware::request_id_middleware, routes, state::AppState};

/// Build the full application router with its middleware stack.
///
/// Sentry layers are not included here; `main` wraps the router in them so
/// tests can drive the app without a Sentry hub.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(CorsLayer::permissive())
}

/// Span for one HTTP request. `request_id` is filled in by the request ID
/// middleware.
fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}
