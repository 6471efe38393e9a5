//! Paywall page - Entry point to ZenPulse.
//!
//! Shows what Premium offers and the available plans. Choosing any plan
//! subscribes immediately; there is no billing behind it.

use dioxus::prelude::*;
use zenpulse_core::{IconRef, PlanId};
use zenpulse_ui::{Button, ButtonVariant, Glyph, GlyphSize};

use crate::components::PlanCard;
use crate::context::{use_catalog, use_subscription};

/// Paywall page component.
#[component]
pub fn Paywall(
    /// "Continue without subscription" was tapped
    on_go_free: EventHandler<()>,
) -> Element {
    let mut subscription = use_subscription();
    let catalog = use_catalog();

    let choose_plan = move |plan: PlanId| {
        tracing::info!(%plan, "Plan chosen");
        subscription.write().subscribe();
    };

    let hero_icon = IconRef::font_awesome("spa");

    rsx! {
        main { class: "paywall",
            section { class: "hero",
                div { class: "hero-glow",
                    Glyph { icon: hero_icon, size: GlyphSize::Hero }
                }
                h1 { class: "hero-title", "ZenPulse Premium" }
                p { class: "hero-subtitle", "Найдите гармонию в цифровом мире" }
            }

            section { class: "features",
                h2 { class: "section-title", "Что вы получите" }
                div { class: "features-grid",
                    for feature in catalog.features().iter().cloned() {
                        div { key: "{feature.text}", class: "feature-card",
                            div { class: "feature-icon",
                                Glyph { icon: feature.icon }
                            }
                            span { class: "feature-text", "{feature.text}" }
                        }
                    }
                }
            }

            section { class: "plans",
                h2 { class: "section-title", "Выберите план" }
                for plan in catalog.plans().iter().cloned() {
                    PlanCard {
                        key: "{plan.id}",
                        plan: plan,
                        on_choose: choose_plan,
                    }
                }
            }

            div { class: "free-continue",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_go_free.call(()),
                    "Продолжить без подписки"
                }
            }

            footer { class: "paywall-footer",
                "Отмена в любое время \u{2022} Доступ ко всем функциям Premium"
            }
        }
    }
}
