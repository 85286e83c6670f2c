//! Registration workflow.
//!
//! Creates a user, subscribes them to the newsletter, and collapses every
//! upstream failure into one coded error and one failure response. Callers
//! never see which collaborator failed; that detail only reaches the
//! structured logger.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::ports::{
    ErrorChannel, NewsletterError, NewsletterService, RegistrationLogger, UserRegistration,
    UserRepository, UserRepositoryError,
};
use crate::domain::{AppCode, CodedError, RegistrationRequest, RegistrationResult, User};

/// Scope attached to every event the workflow logs.
pub const REGISTER_SCOPE: &str = "RegistrationService register";

/// Internal record of which stage stopped a registration.
///
/// Only logged; the caller-facing result is identical for every variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationFailure {
    /// The repository refused or failed to create the user.
    #[error("user creation failed")]
    Repository(#[source] UserRepositoryError),
    /// The newsletter subscription failed after the user was created.
    #[error("newsletter subscription failed")]
    Newsletter(#[source] NewsletterError),
}

impl RegistrationFailure {
    /// Name of the failing stage.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Repository(_) => "repository",
            Self::Newsletter(_) => "newsletter",
        }
    }

    /// Structured payload for the error log.
    ///
    /// `error` holds the upstream error text; the failure's own `Display`
    /// only names the stage.
    #[must_use]
    pub fn log_context(&self) -> Value {
        let (kind, error) = match self {
            Self::Repository(source) => (source.kind(), source.to_string()),
            Self::Newsletter(source) => (source.kind(), source.to_string()),
        };
        json!({
            "stage": self.stage(),
            "kind": kind,
            "error": error,
        })
    }
}

/// User registration service implementing the [`UserRegistration`] port.
///
/// Collaborators are injected as shared handles so tests substitute doubles
/// without touching global state.
pub struct RegistrationService<R, N, L, E> {
    users: Arc<R>,
    newsletter: Arc<N>,
    logger: Arc<L>,
    errors: Arc<E>,
}

impl<R, N, L, E> Clone for RegistrationService<R, N, L, E> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            newsletter: Arc::clone(&self.newsletter),
            logger: Arc::clone(&self.logger),
            errors: Arc::clone(&self.errors),
        }
    }
}

impl<R, N, L, E> RegistrationService<R, N, L, E> {
    /// Create a new service with the given collaborators.
    pub const fn new(users: Arc<R>, newsletter: Arc<N>, logger: Arc<L>, errors: Arc<E>) -> Self {
        Self {
            users,
            newsletter,
            logger,
            errors,
        }
    }
}

impl<R, N, L, E> RegistrationService<R, N, L, E>
where
    R: UserRepository,
    N: NewsletterService,
    L: RegistrationLogger,
    E: ErrorChannel,
{
    /// Register a user and return the uniform outcome.
    ///
    /// The repository is called first; the newsletter is only called once a
    /// user exists. Any failure raises
    /// [`CodedError::registration_failed`] on the error channel exactly once
    /// and yields [`RegistrationResult::failure`]. Nothing is retried or
    /// deduplicated.
    pub async fn register(&self, name: &str, email: &str) -> RegistrationResult {
        match self.create_and_subscribe(name, email).await {
            Ok(user) => {
                self.logger.info(
                    REGISTER_SCOPE,
                    AppCode::RegisterUserSuccess,
                    &json!({ "user": user }),
                );
                RegistrationResult::success()
            }
            Err(failure) => {
                self.logger.error(
                    REGISTER_SCOPE,
                    AppCode::RegisterUserFailed,
                    &failure.log_context(),
                );
                self.errors.raise(&CodedError::registration_failed());
                RegistrationResult::failure()
            }
        }
    }

    async fn create_and_subscribe(
        &self,
        name: &str,
        email: &str,
    ) -> Result<User, RegistrationFailure> {
        let user = self
            .users
            .create_user(name, email)
            .await
            .map_err(RegistrationFailure::Repository)?;
        self.newsletter
            .subscribe_user(&user)
            .await
            .map_err(RegistrationFailure::Newsletter)?;
        Ok(user)
    }
}

#[async_trait]
impl<R, N, L, E> UserRegistration for RegistrationService<R, N, L, E>
where
    R: UserRepository,
    N: NewsletterService,
    L: RegistrationLogger,
    E: ErrorChannel,
{
    async fn register(&self, request: RegistrationRequest) -> RegistrationResult {
        RegistrationService::register(self, &request.name, &request.email).await
    }
}
