use std::sync::Arc;

use dioxus::prelude::*;
use zenpulse_core::{dispatch, resolve_screen, Catalog, Gate, Intent, Screen, SubscriptionState};

use crate::context::SharedCatalog;
use crate::pages::{Meditations, Paywall};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the subscription and catalog contexts, and picks
/// the top-level screen:
///
/// - Subscribed: premium meditation grid
/// - "Continue free" chosen: free meditation grid
/// - Otherwise: paywall
#[component]
pub fn App() -> Element {
    let mut subscription: Signal<SubscriptionState> = use_signal(SubscriptionState::new);
    let catalog: SharedCatalog = use_hook(|| Arc::new(Catalog::new()));

    use_context_provider(|| subscription);
    use_context_provider(|| catalog);

    // Only the root knows the user chose the free grid
    let mut gate: Signal<Gate> = use_signal(Gate::new);

    let mut navigate = move |intent: Intent| {
        dispatch(intent, &mut subscription.write(), &mut gate.write());
    };

    let screen = resolve_screen(subscription().is_subscribed(), gate().show_free_version());

    let body = match screen {
        Screen::Paywall => rsx! {
            Paywall {
                on_go_free: move |_| navigate(Intent::ContinueFree),
            }
        },
        Screen::FreeBrowse => rsx! {
            Meditations {
                on_back: move |_| navigate(Intent::Back),
                on_upgrade: move |_| navigate(Intent::Upgrade),
            }
        },
        Screen::PremiumBrowse => rsx! {
            Meditations {
                on_back: move |_| navigate(Intent::Back),
            }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {body}
    }
}
