//! # Observability & Tracing
//!
//! Structured logging for the whole system. Actors log with an `entity_type` field, so the
//! module path is left out of compact lines.
//!
//! ```bash
//! RUST_LOG=info agri-inventory                  # state changes
//! RUST_LOG=debug agri-inventory                 # full payloads
//! AGRI_LOG_FORMAT=json agri-inventory           # one JSON object per line
//! ```

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .init(),
    }
}
