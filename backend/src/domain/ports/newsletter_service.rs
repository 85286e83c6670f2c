//! Port for newsletter subscriptions.
//!
//! Registration subscribes every newly created user. Adapters report
//! failures through [`NewsletterError`] so the workflow can branch on the
//! outcome instead of intercepting panics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by newsletter adapters.
    pub enum NewsletterError {
        /// The mailing provider could not be reached.
        Unavailable { message: String } => "newsletter provider unavailable: {message}",
        /// The provider refused the subscription.
        Rejected { message: String } => "newsletter subscription rejected: {message}",
    }
}

/// Acknowledgement returned by a successful subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionReceipt {
    msg: String,
}

impl SubscriptionReceipt {
    /// Build a receipt with a custom message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// The plain `success` acknowledgement.
    #[must_use]
    pub fn success() -> Self {
        Self::new("success")
    }

    /// Provider message.
    #[must_use]
    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

/// Port for subscribing users to the newsletter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsletterService: Send + Sync {
    /// Subscribe a freshly created user.
    async fn subscribe_user(&self, user: &User) -> Result<SubscriptionReceipt, NewsletterError>;
}

/// Fixture implementation that acknowledges every subscription.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNewsletterService;

#[async_trait]
impl NewsletterService for FixtureNewsletterService {
    async fn subscribe_user(&self, _user: &User) -> Result<SubscriptionReceipt, NewsletterError> {
        Ok(SubscriptionReceipt::success())
    }
}
