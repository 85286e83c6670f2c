//! In-memory user repository.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Rejection message for a blank name.
pub const NAME_REQUIRED: &str = "Name is required";

/// Repository that keeps created users in a vector.
///
/// Identifiers start at `1` and increase by one per created user. A name
/// that is empty once trimmed is rejected with
/// [`UserRepositoryError::Validation`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every user created so far, in creation order.
    pub fn users(&self) -> Vec<User> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Identifier for the user stored after `count` existing users.
fn next_id(count: usize) -> Result<UserId, UserRepositoryError> {
    i64::try_from(count)
        .ok()
        .and_then(|count| count.checked_add(1))
        .map(UserId::new)
        .ok_or_else(|| UserRepositoryError::query("user identifier space exhausted"))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, UserRepositoryError> {
        if name.trim().is_empty() {
            return Err(UserRepositoryError::validation(NAME_REQUIRED));
        }

        let mut users = self
            .users
            .lock()
            .map_err(|_| UserRepositoryError::query("user store lock poisoned"))?;
        let id = next_id(users.len())?;
        let user = User::new(id, name, email);
        users.push(user.clone());
        debug!(user_id = %id, "user created");
        Ok(user)
    }
}
