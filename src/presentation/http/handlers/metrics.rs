//! Metrics Handler

use axum::{http::header, response::IntoResponse};

use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Prometheus metrics endpoint handler
pub async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let body = metrics::gather_metrics().map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
