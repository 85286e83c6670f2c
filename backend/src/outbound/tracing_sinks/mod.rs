//! `tracing`-backed observability adapters.
//!
//! Both adapters emit structured events; the installed subscriber (see
//! [`crate::telemetry`]) decides how they are rendered.

use serde_json::Value;
use tracing::{error, info};

use crate::domain::ports::{ErrorChannel, RegistrationLogger};
use crate::domain::{AppCode, CodedError};

/// Logger that forwards coded events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRegistrationLogger;

impl RegistrationLogger for TracingRegistrationLogger {
    fn info(&self, scope: &str, app_code: AppCode, context: &Value) {
        info!(scope, app_code = app_code.as_str(), context = %context, "registration event");
    }

    fn error(&self, scope: &str, app_code: AppCode, context: &Value) {
        error!(scope, app_code = app_code.as_str(), context = %context, "registration event");
    }
}

/// Error channel that reports coded errors as `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorChannel;

impl ErrorChannel for TracingErrorChannel {
    fn raise(&self, coded: &CodedError) {
        error!(
            http_status = coded.http_status().as_u16(),
            app_code = coded.app_code().as_str(),
            reason = coded.message(),
            "coded error raised"
        );
    }
}
