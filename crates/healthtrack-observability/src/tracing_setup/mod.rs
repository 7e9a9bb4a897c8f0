//! Tracing setup: subscriber initialization, span macros, event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use healthtrack_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable read for per-crate log levels,
/// e.g. `HEALTHTRACK_LOG=healthtrack_storage=debug,healthtrack=info`.
pub const LOG_ENV_VAR: &str = "HEALTHTRACK_LOG";

static INIT: Once = Once::new();

/// Filter used when `HEALTHTRACK_LOG` is unset or invalid.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!("healthtrack={}", config.log_level.trim().to_ascii_lowercase())
}

/// Install the global subscriber. Idempotent; later calls are no-ops, and
/// an already-installed subscriber from elsewhere is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

        let result = if config.json_logs {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .with(filter)
                .try_init()
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "keeping existing global subscriber");
        }
    });
}
