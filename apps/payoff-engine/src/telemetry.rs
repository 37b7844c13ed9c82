//! Tracing setup.
//!
//! `RUST_LOG` takes precedence over the scenario's logging level.
//!
//! ```rust,ignore
//! use payoff_engine::{config::LoggingConfig, telemetry::init_tracing};
//!
//! init_tracing(&LoggingConfig::default());
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the event filter: `RUST_LOG` if set, else the configured level.
#[must_use]
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Install the global fmt subscriber.
///
/// Logs go to stderr so stdout stays free for the JSON report. Calling this
/// twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing(logging: &LoggingConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_target(logging.include_target)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %logging.level, "Tracing initialized");
    }
}
