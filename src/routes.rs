//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Submission form (public)
//! - `POST /`        - Allocate a short ID for the submitted URL
//! - `GET  /health`  - Health check: store size, pending-flush state
//! - `GET  /{id}`    - Short link redirect, or a no-match page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, home_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
///
/// Static routes win over the `/{id}` capture, so `/health` is never
/// interpreted as a lookup; allocated IDs are hex strings and cannot collide
/// with it anyway.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Request/response tracing at `INFO`, latency in milliseconds.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
