//! Uniform failure-signalling port.
//!
//! Raising a [`CodedError`] reports it to monitoring. It is a side channel:
//! raising never changes what the workflow returns to its caller, and it
//! does not log on the workflow's behalf.

use crate::domain::{AppCode, CodedError, CodedErrorValidationError, HttpStatus};

/// Entry point for coded failures.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorChannel: Send + Sync {
    /// Signal a coded error.
    fn raise(&self, error: &CodedError);
}

/// Construct a [`CodedError`] from its parts and signal it on `channel`.
///
/// Returns the raised error so callers can keep it for their own response.
///
/// # Errors
/// Returns [`CodedErrorValidationError::EmptyMessage`] when `message` is
/// blank; nothing is raised in that case.
///
/// # Examples
/// ```
/// use registration::domain::ports::{NoOpErrorChannel, raise};
/// use registration::domain::{AppCode, HttpStatus};
///
/// let raised = raise(
///     &NoOpErrorChannel,
///     HttpStatus::InternalServerError,
///     AppCode::RegisterUserFailed,
///     "failed to register user",
/// )
/// .expect("message is not blank");
/// assert_eq!(raised.http_status().as_u16(), 500);
/// ```
pub fn raise<C>(
    channel: &C,
    http_status: HttpStatus,
    app_code: AppCode,
    message: impl Into<String>,
) -> Result<CodedError, CodedErrorValidationError>
where
    C: ErrorChannel + ?Sized,
{
    let error = CodedError::try_new(http_status, app_code, message)?;
    channel.raise(&error);
    Ok(error)
}

/// Channel that discards every error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpErrorChannel;

impl ErrorChannel for NoOpErrorChannel {
    fn raise(&self, _error: &CodedError) {}
}
