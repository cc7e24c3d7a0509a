//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten` - Create a short code
//! - `GET  /health`  - Store health check
//! - `GET  /{code}`  - Short link redirect
//!
//! `/health` is a static segment, so it takes priority over the `/{code}` capture.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and request tracing.
///
/// Trailing-slash normalization is applied by [`crate::server::run`] around
/// the returned router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
