//! Route Configuration
//!
//! Configures all HTTP routes for the service.

use axum::{routing::get, Router};

use super::handlers;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cafe", get(handlers::cafe::list_cafes))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(handlers::metrics::metrics_handler))
        .with_state(state)
}
