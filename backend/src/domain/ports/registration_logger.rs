//! Structured logging port for registration outcomes.
//!
//! Keeps observability at the domain boundary so the workflow records coded
//! events without depending on a particular logging backend. Calls are
//! fire-and-forget; the workflow never inspects a logger result.

use serde_json::Value;

use crate::domain::AppCode;

/// Sink for coded success and failure events.
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationLogger: Send + Sync {
    /// Record an informational event.
    fn info(&self, scope: &str, app_code: AppCode, context: &Value);

    /// Record a failure event.
    fn error(&self, scope: &str, app_code: AppCode, context: &Value);
}

/// No-op implementation used when events are not under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRegistrationLogger;

impl RegistrationLogger for NoOpRegistrationLogger {
    fn info(&self, _scope: &str, _app_code: AppCode, _context: &Value) {}

    fn error(&self, _scope: &str, _app_code: AppCode, _context: &Value) {}
}
