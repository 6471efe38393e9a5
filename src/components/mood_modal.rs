//! Mood Modal Component
//!
//! "AI Настрой дня" picker listing the three moods.

use dioxus::prelude::*;
use zenpulse_core::{IconRef, MoodEntry};
use zenpulse_ui::{Glyph, IconAction, IconButton};

/// Mood Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MoodModal {
///         show: picker().is_open(),
///         moods: catalog.moods().to_vec(),
///         on_close: move |_| picker.write().close(),
///         on_select: move |mood| select_mood(mood),
///     }
/// }
/// ```
#[component]
pub fn MoodModal(
    /// Whether to show the modal
    show: bool,
    moods: Vec<MoodEntry>,
    /// Callback when modal is closed without a choice
    on_close: EventHandler<()>,
    /// Callback with the chosen mood
    on_select: EventHandler<MoodEntry>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "mood-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    div { class: "modal-title-row",
                        Glyph { icon: IconRef::font_awesome("brain") }
                        h2 { class: "modal-title", "AI Настрой дня" }
                    }
                    IconButton {
                        action: IconAction::Close,
                        onclick: move |_| on_close.call(()),
                    }
                }

                p { class: "modal-description",
                    "Выберите настроение для персонализированной медитации"
                }

                div { class: "mood-grid",
                    for mood in moods.iter() {
                        {
                            let chosen = mood.clone();
                            rsx! {
                                button {
                                    key: "{mood.id}",
                                    class: "mood-card",
                                    r#type: "button",
                                    onclick: move |_| on_select.call(chosen.clone()),
                                    div { class: "mood-icon",
                                        Glyph { icon: mood.icon }
                                    }
                                    div { class: "mood-text",
                                        span { class: "mood-name", "{mood.name}" }
                                        span { class: "mood-description", "{mood.description}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
