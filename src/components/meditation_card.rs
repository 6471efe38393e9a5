//! Meditation Card Component
//!
//! One tile in the meditation grid. Locked tiles hide the icon and title
//! behind a lock and never reveal the entry's content.

use dioxus::prelude::*;
use zenpulse_core::access::LOCKED_TITLE;
use zenpulse_core::{access_for, tap_meditation, AlertDialog, IconRef, MeditationEntry, TapOutcome};
use zenpulse_ui::{Glyph, GlyphSize};

use crate::context::use_subscription;

/// Meditation Card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MeditationCard {
///         meditation: entry,
///         on_open: move |dialog| current_dialog.set(Some(dialog)),
///         on_upgrade: move |_| navigate(Intent::Upgrade),
///     }
/// }
/// ```
#[component]
pub fn MeditationCard(
    meditation: MeditationEntry,
    /// Called with a dialog to show (details, or the subscribe prompt)
    on_open: EventHandler<AlertDialog>,
    /// When set, locked taps call this instead of prompting
    on_upgrade: Option<EventHandler<()>>,
) -> Element {
    let subscription = use_subscription();
    let is_subscribed = subscription().is_subscribed();
    let locked = access_for(&meditation, is_subscribed).is_locked();

    let card_class = if locked { "meditation-card locked" } else { "meditation-card" };
    let (icon, title) = if locked {
        (IconRef::material("lock"), LOCKED_TITLE)
    } else {
        (meditation.icon, meditation.title)
    };
    let duration = meditation.duration;

    let handle_tap = move |_| {
        let is_subscribed = subscription().is_subscribed();
        match tap_meditation(&meditation, is_subscribed, on_upgrade.is_some()) {
            TapOutcome::Details(dialog) | TapOutcome::SubscribePrompt(dialog) => on_open.call(dialog),
            TapOutcome::UpgradeRequested => {
                if let Some(handler) = on_upgrade {
                    handler.call(());
                }
            }
        }
    };

    rsx! {
        button {
            class: "{card_class}",
            r#type: "button",
            onclick: handle_tap,

            div { class: "card-icon",
                Glyph { icon: icon, size: GlyphSize::Large, muted: locked }
            }
            span { class: "card-title", "{title}" }
            span { class: "card-duration", "{duration}" }
        }
    }
}
