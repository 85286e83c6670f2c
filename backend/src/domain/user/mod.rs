//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric user identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account; every registration starts here.
    #[default]
    User,
    /// Administrative account.
    Admin,
}

impl UserRole {
    /// Wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application user as created by a
/// [`UserRepository`](crate::domain::ports::UserRepository).
///
/// The registration workflow only holds a user for the duration of one call;
/// it never stores it.
///
/// # Examples
/// ```
/// use registration::domain::{User, UserId, UserRole};
///
/// let user = User::new(UserId::new(1), "John Doe", "test@test.com");
/// assert_eq!(user.role(), UserRole::User);
/// assert_eq!(user.name(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
}

impl User {
    /// Build a user with the default [`UserRole::User`] role.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: UserRole::default(),
        }
    }

    /// Replace the role.
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Identifier assigned by the repository.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Name supplied at registration.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email supplied at registration.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Account role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }
}
