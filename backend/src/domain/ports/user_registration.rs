//! Driving port for user registration.
//!
//! Inbound adapters (the `register-user` binary, tests) call this port
//! without knowing which repository or newsletter backs it.

use async_trait::async_trait;

use crate::domain::{RegistrationRequest, RegistrationResult};

/// Domain use-case port for registering users.
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Register a user and report the uniform outcome.
    async fn register(&self, request: RegistrationRequest) -> RegistrationResult;
}

/// Fixture that reports success without touching any collaborator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRegistration;

#[async_trait]
impl UserRegistration for FixtureUserRegistration {
    async fn register(&self, _request: RegistrationRequest) -> RegistrationResult {
        RegistrationResult::success()
    }
}
