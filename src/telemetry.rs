//! Telemetry
//!
//! Tracing subscriber setup driven by [`LogSettings`]. `RUST_LOG` overrides
//! the configured filter; otherwise the configured directives or the crate
//! default apply.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LogSettings};

/// Filter used when neither `RUST_LOG` nor `log.filter` is set
pub const DEFAULT_FILTER: &str = "info,cafe_finder=debug,tower_http=debug";

/// Directives applied when `RUST_LOG` is absent
pub fn filter_directives(settings: &LogSettings) -> &str {
    settings
        .filter
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
}

/// Initialize the global tracing subscriber
pub fn init_tracing(settings: &LogSettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(settings)));

    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .init(),
    }

    tracing::info!(format = ?settings.format, "Tracing initialized");
}
