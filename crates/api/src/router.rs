//! Application router assembly.
//!
//! [`build_app_router`] is the single place the route tree and middleware
//! are put together; the binary and the integration tests both call it.

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{middleware, BoxError, Router};
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::middleware::latency::simulate_latency;
use crate::middleware::recovery::{layer_error, panic_response};
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// `from_static` only accepts lowercase names.
const TENANT_HEADER_LOWER: &str = "x-tenant-id";

/// Router for `/health`, the `/api/v1` resources and the not-found and
/// wrong-method fallbacks.
///
/// Outermost first, a request passes CORS, request-id assignment, the trace
/// span, request-id propagation, the timeout and panic recovery. Only the
/// `/api/v1` tree is delayed by `MOCK_LATENCY_MS`. Timeouts and panics are
/// answered with the same error payload as handler failures.
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout_secs = config.request_timeout_secs;

    let api = routes::api_routes().layer(middleware::from_fn_with_state(
        state.clone(),
        simulate_latency,
    ));

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", api)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    layer_error(err, timeout_secs)
                }))
                .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs))),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(&config.cors_origins))
        .with_state(state)
}

/// CORS for the configured front-end origins.
///
/// Panics at startup if any configured origin is invalid.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(TENANT_HEADER_LOWER)])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
