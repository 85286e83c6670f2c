//! Request and response shapes for user registration.

use serde::{Deserialize, Serialize};

use super::error::REGISTER_USER_FAILED_MESSAGE;

/// Message returned when a user was created and subscribed.
pub const REGISTER_USER_SUCCESS_MESSAGE: &str = "user registered successfully";

/// Caller-owned registration input.
///
/// The workflow does not validate these fields; the repository decides what
/// it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Name of the new user.
    pub name: String,
    /// Email address of the new user.
    pub email: String,
}

impl RegistrationRequest {
    /// Build a request from borrowed or owned strings.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Uniform response returned on both the success and failure paths.
///
/// # Examples
/// ```
/// use registration::domain::RegistrationResult;
///
/// let ok = RegistrationResult::success();
/// assert_eq!(ok.msg(), "user registered successfully");
/// assert!(!RegistrationResult::failure().is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationResult {
    msg: String,
}

impl RegistrationResult {
    /// The success response.
    #[must_use]
    pub fn success() -> Self {
        Self {
            msg: REGISTER_USER_SUCCESS_MESSAGE.to_owned(),
        }
    }

    /// The failure response shared by every failing stage.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            msg: REGISTER_USER_FAILED_MESSAGE.to_owned(),
        }
    }

    /// Message shown to the caller.
    #[must_use]
    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }

    /// Whether this is the success response.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.msg == REGISTER_USER_SUCCESS_MESSAGE
    }
}
