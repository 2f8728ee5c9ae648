//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod cafe;
pub mod health;
pub mod metrics;
