//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Café lookups by outcome (`ok`, `unknown_city`, `bad_count`)
//! - Total number of café names returned

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::QueryError;

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Café lookups by outcome
pub static CAFE_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cafe_requests_total", "Total number of cafe lookups").namespace("cafe_finder"),
        &["outcome"],
    )
    .expect("Failed to create CAFE_REQUESTS_TOTAL metric")
});

/// Café names returned across all successful lookups
pub static CAFES_RETURNED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("cafes_returned_total", "Total number of cafe names returned")
            .namespace("cafe_finder"),
    )
    .expect("Failed to create CAFES_RETURNED_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(CAFE_REQUESTS_TOTAL.clone()))
        .expect("Failed to register CAFE_REQUESTS_TOTAL");
    registry
        .register(Box::new(CAFES_RETURNED_TOTAL.clone()))
        .expect("Failed to register CAFES_RETURNED_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Label for a lookup outcome
pub fn outcome_label(result: Result<(), QueryError>) -> &'static str {
    match result {
        Ok(()) => "ok",
        Err(QueryError::UnknownCity) => "unknown_city",
        Err(QueryError::BadCount) => "bad_count",
    }
}

/// Record a successful lookup returning `found` cafés
pub fn record_lookup(found: usize) {
    Lazy::force(&REGISTRY);
    CAFE_REQUESTS_TOTAL.with_label_values(&[outcome_label(Ok(()))]).inc();
    CAFES_RETURNED_TOTAL.inc_by(found as u64);
}

/// Record a rejected lookup
pub fn record_rejection(error: QueryError) {
    Lazy::force(&REGISTRY);
    CAFE_REQUESTS_TOTAL
        .with_label_values(&[outcome_label(Err(error))])
        .inc();
}
