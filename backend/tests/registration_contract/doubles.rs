//! Test doubles for the registration collaborators.

use std::sync::{Arc, Mutex};

use registration::domain::ports::{
    ErrorChannel, NewsletterError, NewsletterService, RegistrationLogger, SubscriptionReceipt,
    UserRepository, UserRepositoryError,
};
use registration::domain::{AppCode, CodedError, User};
use serde_json::Value;

use super::recording_double_macro::recording_double;

recording_double! {
    /// User repository that records `(name, email)` pairs.
    pub(crate) struct RecordingUserRepository {
        trait: UserRepository,
        method: create_user(&self, name: &str, email: &str) -> Result<User, UserRepositoryError>,
        records: (String, String) = (name.to_owned(), email.to_owned()),
    }
}

recording_double! {
    /// Newsletter that records the users it was asked to subscribe.
    pub(crate) struct RecordingNewsletter {
        trait: NewsletterService,
        method: subscribe_user(&self, user: &User) -> Result<SubscriptionReceipt, NewsletterError>,
        records: User = user.clone(),
    }
}

/// Severity of a logged registration event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Info,
    Error,
}

/// One event captured by [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LoggedEvent {
    pub(crate) level: Level,
    pub(crate) scope: String,
    pub(crate) app_code: AppCode,
    pub(crate) context: Value,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingLogger {
    events: Arc<Mutex<Vec<LoggedEvent>>>,
}

impl RecordingLogger {
    pub(crate) fn events(&self) -> Vec<LoggedEvent> {
        self.events.lock().expect("logger events lock").clone()
    }

    fn push(&self, level: Level, scope: &str, app_code: AppCode, context: &Value) {
        self.events
            .lock()
            .expect("logger events lock")
            .push(LoggedEvent {
                level,
                scope: scope.to_owned(),
                app_code,
                context: context.clone(),
            });
    }
}

impl RegistrationLogger for RecordingLogger {
    fn info(&self, scope: &str, app_code: AppCode, context: &Value) {
        self.push(Level::Info, scope, app_code, context);
    }

    fn error(&self, scope: &str, app_code: AppCode, context: &Value) {
        self.push(Level::Error, scope, app_code, context);
    }
}

/// Error channel spy that keeps every raised error.
#[derive(Clone, Default)]
pub(crate) struct RecordingErrorChannel {
    raised: Arc<Mutex<Vec<CodedError>>>,
}

impl RecordingErrorChannel {
    pub(crate) fn raised(&self) -> Vec<CodedError> {
        self.raised.lock().expect("raised errors lock").clone()
    }
}

impl ErrorChannel for RecordingErrorChannel {
    fn raise(&self, error: &CodedError) {
        self.raised
            .lock()
            .expect("raised errors lock")
            .push(error.clone());
    }
}
