//! Meditations page - the browse grid.
//!
//! Used for both the free and the premium grid; the difference is whether the
//! root passes an upgrade handler and what the subscription signal says.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use zenpulse_core::{AlertDialog, DialogActionKind, DialogQueue, IconRef, MoodEntry, MoodPicker};
use zenpulse_ui::{Button, ButtonVariant, Glyph, GlyphSize, IconAction, IconButton};

use crate::components::{AlertDialogView, MeditationCard, MoodModal};
use crate::context::{use_catalog, use_subscription};

/// Meditations page component.
///
/// Owns the mood picker and the delayed response task. The task belongs to
/// this scope and is cancelled when the page goes away or a newer mood is
/// picked, so a late response never lands on a stale view.
#[component]
pub fn Meditations(
    /// Back arrow in the header
    on_back: EventHandler<()>,
    /// Locked cards route here when set (free grid only)
    on_upgrade: Option<EventHandler<()>>,
) -> Element {
    let mut subscription = use_subscription();
    let catalog = use_catalog();

    let mut picker: Signal<MoodPicker> = use_signal(MoodPicker::new);
    let mut dialogs: Signal<DialogQueue> = use_signal(DialogQueue::new);
    let pending_response: Rc<Cell<Option<Task>>> = use_hook(|| Rc::new(Cell::new(None)));

    {
        let pending_response = pending_response.clone();
        use_drop(move || {
            if let Some(task) = pending_response.take() {
                tracing::debug!("Dropping pending mood response");
                task.cancel();
            }
        });
    }

    let select_mood = move |mood: MoodEntry| {
        let pending = picker.write().select(&mood);

        if let Some(previous) = pending_response.take() {
            previous.cancel();
        }

        let slot = pending_response.clone();
        let task = spawn(async move {
            let response = pending.arrive().await;
            // waits behind a dialog the user opened meanwhile
            dialogs.write().present(response);
            slot.set(None);
        });
        pending_response.set(Some(task));
    };

    let handle_dialog_action = move |kind: DialogActionKind| {
        if kind == DialogActionKind::Subscribe {
            tracing::info!("Subscribing from locked-content prompt");
            subscription.write().subscribe();
        }
        dialogs.write().dismiss();
    };

    let is_subscribed = subscription().is_subscribed();
    let selected_mood = picker().selected().map(|id| catalog.mood(id).clone());
    let (status_class, status_text) = if is_subscribed {
        ("status-text premium", "Premium подписка активна")
    } else {
        ("status-text", "Бесплатная версия")
    };

    rsx! {
        main { class: "meditations",
            header { class: "browse-header",
                div { class: "header-left",
                    IconButton {
                        action: IconAction::Back,
                        onclick: move |_| on_back.call(()),
                    }
                    Glyph { icon: IconRef::font_awesome("spa") }
                    h1 { class: "header-title", "Медитации" }
                }
                if let Some(mood) = selected_mood {
                    div { class: "header-mood",
                        Glyph { icon: mood.icon, size: GlyphSize::Small }
                        span { class: "header-mood-text", "{mood.name}" }
                    }
                }
            }

            div { class: "status-bar",
                span { class: "{status_class}", "{status_text}" }
            }

            div { class: "meditation-grid",
                for meditation in catalog.meditations().iter().cloned() {
                    MeditationCard {
                        key: "{meditation.id}",
                        meditation: meditation,
                        on_open: move |d: AlertDialog| dialogs.write().present(d),
                        on_upgrade: on_upgrade,
                    }
                }
            }

            Button {
                variant: ButtonVariant::Fab,
                aria_label: "AI настрой".to_string(),
                onclick: move |_| picker.write().open(),
                Glyph { icon: IconRef::font_awesome("brain") }
            }

            MoodModal {
                show: picker().is_open(),
                moods: catalog.moods().to_vec(),
                on_close: move |_| picker.write().close(),
                on_select: select_mood,
            }

            if let Some(current) = dialogs().current().cloned() {
                AlertDialogView {
                    dialog: current,
                    on_action: handle_dialog_action,
                }
            }
        }
    }
}
