//! Infrastructure Layer
//!
//! Contains implementations for external concerns:
//! - Catalog loading at startup (built-in or JSON file)
//! - Prometheus metrics

pub mod catalog_loader;
pub mod metrics;
