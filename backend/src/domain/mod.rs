//! Domain primitives, ports, and the registration workflow.
//!
//! Purpose: keep the registration contract independent of any logging,
//! storage, or transport backend. Types are immutable once built and document
//! their serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - CodedError (alias to `error::CodedError`): status, app code and message.
//! - User (alias to `user::User`): user record created by the repository.
//! - RegistrationResult: uniform `{ msg }` response for callers.
//! - RegistrationService: orchestrates repository and newsletter calls.

pub mod error;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod user;

pub use self::error::{
    AppCode, CodedError, CodedErrorValidationError, HttpStatus, REGISTER_USER_FAILED_MESSAGE,
};
pub use self::registration::{
    REGISTER_USER_SUCCESS_MESSAGE, RegistrationRequest, RegistrationResult,
};
pub use self::registration_service::{REGISTER_SCOPE, RegistrationFailure, RegistrationService};
pub use self::user::{User, UserId, UserRole};
