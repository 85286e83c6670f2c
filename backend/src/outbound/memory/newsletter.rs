//! In-memory newsletter.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{NewsletterError, NewsletterService, SubscriptionReceipt};
use crate::domain::{User, UserId};

/// Newsletter that records subscriber identifiers.
///
/// Subscribing the same user twice is rejected.
#[derive(Debug, Default)]
pub struct InMemoryNewsletter {
    subscribers: Mutex<BTreeSet<UserId>>,
}

impl InMemoryNewsletter {
    /// Create a newsletter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is subscribed.
    pub fn is_subscribed(&self, id: UserId) -> bool {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id)
    }

    /// Number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl NewsletterService for InMemoryNewsletter {
    async fn subscribe_user(&self, user: &User) -> Result<SubscriptionReceipt, NewsletterError> {
        let mut subscribers = self
            .subscribers
            .lock()
            .map_err(|_| NewsletterError::unavailable("subscriber list lock poisoned"))?;
        if !subscribers.insert(user.id()) {
            return Err(NewsletterError::rejected(format!(
                "user {} is already subscribed",
                user.id()
            )));
        }
        debug!(user_id = %user.id(), "user subscribed to newsletter");
        Ok(SubscriptionReceipt::success())
    }
}
