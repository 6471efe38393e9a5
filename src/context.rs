//! Application state provisioning for ZenPulse.
//!
//! The root [`App`](crate::app::App) builds one [`SubscriptionState`] and one
//! [`Catalog`] at startup and provides them to every screen through context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut subscription = use_subscription();
//! if !subscription().is_subscribed() {
//!     subscription.write().subscribe();
//! }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use zenpulse_core::{Catalog, SubscriptionState};

/// Shared catalog type for context.
pub type SharedCatalog = Arc<Catalog>;

/// Hook to access the subscription state from context.
///
/// Returns a reactive signal; every component that reads it re-renders after
/// `subscribe` or `reset_subscription`.
///
/// # Panics
///
/// Panics when called outside the `App` tree. That is a wiring bug, not a
/// runtime condition.
pub fn use_subscription() -> Signal<SubscriptionState> {
    match try_use_context::<Signal<SubscriptionState>>() {
        Some(subscription) => subscription,
        None => panic!("use_subscription must be used within the App component tree"),
    }
}

/// Hook to access the fixed catalog from context.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_catalog() -> SharedCatalog {
    match try_use_context::<SharedCatalog>() {
        Some(catalog) => catalog,
        None => panic!("use_catalog must be used within the App component tree"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn SubscriptionOutsideApp() -> Element {
        let subscription = use_subscription();
        let is_subscribed = subscription().is_subscribed();
        rsx! { "{is_subscribed}" }
    }

    fn CatalogOutsideApp() -> Element {
        let catalog = use_catalog();
        let count = catalog.meditations().len();
        rsx! { "{count}" }
    }

    #[test]
    #[should_panic(expected = "must be used within")]
    fn subscription_hook_panics_without_provider() {
        let mut dom = VirtualDom::new(SubscriptionOutsideApp);
        dom.rebuild_in_place();
    }

    #[test]
    #[should_panic(expected = "must be used within")]
    fn catalog_hook_panics_without_provider() {
        let mut dom = VirtualDom::new(CatalogOutsideApp);
        dom.rebuild_in_place();
    }
}
