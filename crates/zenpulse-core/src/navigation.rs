//! Navigation gating
//!
//! The visible screen is never stored. It is derived from two booleans:
//!
//! ```text
//! ┌───────────────┬───────────────────┬────────────────┐
//! │ is_subscribed │ show_free_version │ Screen         │
//! ├───────────────┼───────────────────┼────────────────┤
//! │ true          │ any               │ PremiumBrowse  │
//! │ false         │ true              │ FreeBrowse     │
//! │ false         │ false             │ Paywall        │
//! └───────────────┴───────────────────┴────────────────┘
//! ```
//!
//! Subscription truth always overrides a stale "continue free" choice.

use std::fmt;

use tracing::info;

use crate::subscription::SubscriptionState;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Plan selection with a "continue free" escape hatch
    Paywall,
    /// Meditation grid with premium entries locked
    FreeBrowse,
    /// Meditation grid with everything unlocked
    PremiumBrowse,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Paywall => write!(f, "Paywall"),
            Screen::FreeBrowse => write!(f, "FreeBrowse"),
            Screen::PremiumBrowse => write!(f, "PremiumBrowse"),
        }
    }
}

/// Compute the current screen.
pub fn resolve_screen(is_subscribed: bool, show_free_version: bool) -> Screen {
    if is_subscribed {
        Screen::PremiumBrowse
    } else if show_free_version {
        Screen::FreeBrowse
    } else {
        Screen::Paywall
    }
}

/// Local "continue free" flag owned by the root component
///
/// Only meaningful while the user is not subscribed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gate {
    show_free_version: bool,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_free_version(&self) -> bool {
        self.show_free_version
    }

    /// User chose "continue without subscription"
    pub fn continue_free(&mut self) {
        self.show_free_version = true;
    }

    /// User tapped back from the free grid
    pub fn back_to_paywall(&mut self) {
        self.show_free_version = false;
    }

    /// User tapped "upgrade" on a locked card
    pub fn upgrade(&mut self) {
        self.show_free_version = false;
    }
}

/// User intent that moves between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "Continue without subscription" on the paywall
    ContinueFree,
    /// Back arrow in the browse header
    Back,
    /// Upgrade requested from a locked card
    Upgrade,
    /// A plan was chosen, or the locked-content prompt was accepted
    Subscribe,
}

/// Apply an intent and return the resulting screen.
///
/// `Back` depends on where the user is: from the free grid it only clears the
/// local flag; from the premium grid it resets the subscription and clears the
/// flag, so the user always lands on the paywall.
pub fn dispatch(intent: Intent, subscription: &mut SubscriptionState, gate: &mut Gate) -> Screen {
    let from = resolve_screen(subscription.is_subscribed(), gate.show_free_version());

    match (intent, from) {
        (Intent::ContinueFree, Screen::Paywall) => gate.continue_free(),
        (Intent::Back, Screen::FreeBrowse) => gate.back_to_paywall(),
        (Intent::Back, Screen::PremiumBrowse) => {
            subscription.reset_subscription();
            gate.back_to_paywall();
        }
        (Intent::Upgrade, Screen::FreeBrowse) => gate.upgrade(),
        (Intent::Subscribe, _) => {
            subscription.subscribe();
        }
        _ => {}
    }

    let to = resolve_screen(subscription.is_subscribed(), gate.show_free_version());
    if from != to {
        info!(?intent, %from, %to, "Screen transition");
    }
    to
}
