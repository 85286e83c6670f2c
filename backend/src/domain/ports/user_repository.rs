//! Port abstraction for user creation and its errors.
use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The adapter refused the supplied fields.
        Validation { message: String } => "user repository rejected input: {message}",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Port for creating user records.
///
/// Implementations assign the identifier and role. Invalid input, such as an
/// empty name, is reported as [`UserRepositoryError::Validation`] rather than
/// panicking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user from a name and an email address.
    async fn create_user(&self, name: &str, email: &str) -> Result<User, UserRepositoryError>;
}

/// Fixture implementation that accepts every request.
///
/// Always returns a user with identifier `1`. Use it in unit tests where the
/// repository behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, UserRepositoryError> {
        Ok(User::new(crate::domain::UserId::new(1), name, email))
    }
}
