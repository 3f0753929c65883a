//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`orders`] - order management

pub mod health;
pub mod orders;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::Uri;
use axum::{BoxError, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

/// Build the application with all routes, middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        // Health API - public route
        .merge(health::router())
        // Orders API
        .merge(orders::router())
        .fallback(fallback)
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Timeout - slow requests answer with the error envelope
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(timeout),
        )
        .with_state(state)
}

async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::with_message(ErrorCode::TimeoutError, "Request timed out")
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}
