//! Alert Dialog Component
//!
//! Renders a core [`AlertDialog`] as a modal with one button per action.

use dioxus::prelude::*;
use zenpulse_core::{AlertDialog, DialogActionKind};

/// CSS class for a dialog button
fn action_class(kind: DialogActionKind) -> &'static str {
    match kind {
        DialogActionKind::Dismiss => "dialog-btn",
        DialogActionKind::Cancel => "dialog-btn cancel",
        DialogActionKind::Subscribe => "dialog-btn accent",
    }
}

/// Alert Dialog
///
/// Tapping the overlay counts as a dismiss.
#[component]
pub fn AlertDialogView(
    dialog: AlertDialog,
    /// Called with the kind of the pressed button
    on_action: EventHandler<DialogActionKind>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_action.call(DialogActionKind::Dismiss),

            div {
                class: "alert-dialog",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "{dialog.title}" }
                p { class: "alert-message", "{dialog.message}" }

                div { class: "modal-actions",
                    for action in dialog.actions.iter() {
                        {
                            let kind = action.kind;
                            rsx! {
                                button {
                                    key: "{action.label}",
                                    class: action_class(kind),
                                    onclick: move |_| on_action.call(kind),
                                    "{action.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
