//! Subscription state holder
//!
//! One instance exists for the lifetime of the process. It starts unsubscribed
//! on every launch and is never persisted. The UI wraps it in a reactive
//! signal so every reader re-renders after a mutation.

use tracing::{debug, info};

/// Client-side subscription flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionState {
    is_subscribed: bool,
}

impl SubscriptionState {
    /// Fresh, unsubscribed state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self) -> bool {
        self.is_subscribed
    }

    /// Mark the user as subscribed.
    ///
    /// Idempotent. Returns whether the flag changed.
    pub fn subscribe(&mut self) -> bool {
        self.set(true)
    }

    /// Clear the subscription.
    ///
    /// Idempotent. Returns whether the flag changed.
    pub fn reset_subscription(&mut self) -> bool {
        self.set(false)
    }

    fn set(&mut self, subscribed: bool) -> bool {
        if self.is_subscribed == subscribed {
            debug!(subscribed, "Subscription unchanged");
            return false;
        }
        self.is_subscribed = subscribed;
        info!(subscribed, "Subscription changed");
        true
    }
}
