//! Tracing subscriber installation.

mod config;

pub use config::{DEFAULT_LOG_FILTER, TelemetrySettings};

use std::io;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Build the `EnvFilter` for `settings`.
///
/// An unparsable directive falls back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter(settings: &TelemetrySettings) -> EnvFilter {
    EnvFilter::try_new(settings.log_filter()).unwrap_or_else(|error| {
        warn!(filter = settings.log_filter(), error = %error, "invalid log filter; using default");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Install the global subscriber described by `settings`.
///
/// Events go to stderr so stdout stays free for command output. JSON is the
/// default; `pretty_logs` switches to the human-readable formatter. A
/// subscriber that is already installed is left in place.
pub fn init_tracing(settings: &TelemetrySettings) {
    let builder = fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(settings));
    let result = if settings.pretty_logs {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
