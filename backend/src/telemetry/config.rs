//! Telemetry configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Filter applied when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration values controlling log output.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REGISTRATION")]
pub struct TelemetrySettings {
    /// `EnvFilter` directive, such as `info` or `registration=debug`.
    pub log_filter: Option<String>,
    /// Render human-readable lines instead of JSON.
    #[ortho_config(default = false)]
    pub pretty_logs: bool,
}

impl TelemetrySettings {
    /// Return the configured filter, falling back to the default.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
