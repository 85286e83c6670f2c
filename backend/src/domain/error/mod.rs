//! Coded application errors.
//!
//! A [`CodedError`] pairs a transport-level status with an application code
//! and a human-readable message. The type is transport agnostic: it only
//! records the HTTP-like status a caller should use, it never builds a
//! response itself. Errors are signalled through the
//! [`ErrorChannel`](crate::domain::ports::ErrorChannel) port.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP-like status attached to a [`CodedError`].
///
/// Two renderings exist. Serde uses the symbolic name
/// (`"INTERNAL_SERVER_ERROR"`) so payloads stay self-describing. `Display`
/// and [`HttpStatus::as_u16`] give the numeric code (`500`), which is what
/// log fields carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpStatus {
    /// The operation succeeded.
    Ok,
    /// A resource was created.
    Created,
    /// The request is malformed or fails validation.
    BadRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected failure occurred while serving the request.
    InternalServerError,
    /// A dependency is temporarily unavailable.
    ServiceUnavailable,
}

impl HttpStatus {
    /// Numeric status code.
    ///
    /// # Examples
    /// ```
    /// use registration::domain::HttpStatus;
    ///
    /// assert_eq!(HttpStatus::InternalServerError.as_u16(), 500);
    /// ```
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Whether the status describes a server-side failure.
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        self.as_u16() >= 500
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Stable application code identifying the outcome of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppCode {
    /// A user was created and subscribed to the newsletter.
    RegisterUserSuccess,
    /// User registration failed at any stage.
    RegisterUserFailed,
}

impl AppCode {
    /// Machine-readable code as emitted in logs and payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegisterUserSuccess => "REGISTER_USER_SUCCESS",
            Self::RegisterUserFailed => "REGISTER_USER_FAILED",
        }
    }
}

impl fmt::Display for AppCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message used whenever registration collapses into a failure.
pub const REGISTER_USER_FAILED_MESSAGE: &str = "failed to register user";

/// Coded error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use registration::domain::{AppCode, CodedError, HttpStatus};
///
/// let err = CodedError::registration_failed();
/// assert_eq!(err.http_status(), HttpStatus::InternalServerError);
/// assert_eq!(err.app_code(), AppCode::RegisterUserFailed);
/// assert_eq!(err.message(), "failed to register user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "CodedErrorDto", into = "CodedErrorDto")]
pub struct CodedError {
    http_status: HttpStatus,
    app_code: AppCode,
    message: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodedErrorValidationError {
    /// The message is empty once trimmed.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl CodedError {
    /// Create a new error, panicking if validation fails.
    ///
    /// # Panics
    /// Panics when `message` is blank. Use [`CodedError::try_new`] for
    /// untrusted input.
    pub fn new(http_status: HttpStatus, app_code: AppCode, message: impl Into<String>) -> Self {
        match Self::try_new(http_status, app_code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        http_status: HttpStatus,
        app_code: AppCode,
        message: impl Into<String>,
    ) -> Result<Self, CodedErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(CodedErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            http_status,
            app_code,
            message,
        })
    }

    /// The single failure reported for any registration problem.
    #[must_use]
    pub fn registration_failed() -> Self {
        Self::new(
            HttpStatus::InternalServerError,
            AppCode::RegisterUserFailed,
            REGISTER_USER_FAILED_MESSAGE,
        )
    }

    /// HTTP-like status for adapters.
    #[must_use]
    pub const fn http_status(&self) -> HttpStatus {
        self.http_status
    }

    /// Stable application code.
    #[must_use]
    pub const fn app_code(&self) -> AppCode {
        self.app_code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CodedError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CodedErrorDto {
    http_status: HttpStatus,
    app_code: AppCode,
    message: String,
}

impl From<CodedError> for CodedErrorDto {
    fn from(value: CodedError) -> Self {
        Self {
            http_status: value.http_status,
            app_code: value.app_code,
            message: value.message,
        }
    }
}

impl TryFrom<CodedErrorDto> for CodedError {
    type Error = CodedErrorValidationError;

    fn try_from(value: CodedErrorDto) -> Result<Self, Self::Error> {
        let CodedErrorDto {
            http_status,
            app_code,
            message,
        } = value;
        Self::try_new(http_status, app_code, message)
    }
}
