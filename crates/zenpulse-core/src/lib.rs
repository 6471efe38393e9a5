//! ZenPulse Core Library
//!
//! Subscription gating, catalog data and canned mood responses for the
//! ZenPulse meditation app.
//!
//! ## Overview
//!
//! ZenPulse shows a paywall and a grid of guided meditations. Access to
//! premium meditations is gated by a client-side subscription flag that lives
//! only for the lifetime of the process. Nothing here performs I/O: the crate
//! is pure state and data, driven by the desktop UI.
//!
//! ## Core Principles
//!
//! - **Computed navigation**: the visible screen is a pure function of
//!   `(is_subscribed, show_free_version)`; subscription always wins.
//! - **Closed catalogs**: meditations, moods and plans are fixed lists built
//!   once at startup; icons are resolved to glyphs at construction.
//! - **No persistence**: subscription state resets to `false` on every start.
//!
//! ## Quick Start
//!
//! ```
//! use zenpulse_core::{resolve_screen, Catalog, Gate, Screen, SubscriptionState};
//!
//! let catalog = Catalog::new();
//! let mut subscription = SubscriptionState::new();
//! let mut gate = Gate::new();
//! assert_eq!(resolve_screen(subscription.is_subscribed(), gate.show_free_version()), Screen::Paywall);
//!
//! gate.continue_free();
//! let sleep = catalog.meditation("2").unwrap();
//! assert!(zenpulse_core::is_locked(sleep, subscription.is_subscribed()));
//!
//! subscription.subscribe();
//! assert_eq!(resolve_screen(subscription.is_subscribed(), gate.show_free_version()), Screen::PremiumBrowse);
//! ```

pub mod access;
pub mod catalog;
pub mod dialog;
pub mod error;
pub mod logging;
pub mod mood;
pub mod navigation;
pub mod subscription;
pub mod types;

// Re-exports
pub use access::{access_for, is_locked, tap_meditation, Access, TapOutcome};
pub use catalog::Catalog;
pub use dialog::{AlertDialog, DialogAction, DialogActionKind, DialogQueue};
pub use error::{ZenError, ZenResult};
pub use mood::{canned_response, lookup_response, MoodPicker, PendingResponse, MOOD_RESPONSE_DELAY};
pub use navigation::{dispatch, resolve_screen, Gate, Intent, Screen};
pub use subscription::SubscriptionState;
pub use types::*;
