//! Plan Card Component
//!
//! One subscription plan on the paywall. The popular plan gets a badge and
//! the inverted call-to-action.

use dioxus::prelude::*;
use zenpulse_core::{IconRef, PlanId, SubscriptionPlan};
use zenpulse_ui::{Button, ButtonVariant, Glyph, GlyphSize};

/// Plan Card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PlanCard {
///         plan: plan,
///         on_choose: move |id| subscribe(id),
///     }
/// }
/// ```
#[component]
pub fn PlanCard(
    plan: SubscriptionPlan,
    /// Called with the plan id when the card or its button is tapped
    on_choose: EventHandler<PlanId>,
) -> Element {
    let id = plan.id;
    let card_class = if plan.is_popular { "plan-card popular" } else { "plan-card" };
    let variant = if plan.is_popular { ButtonVariant::Popular } else { ButtonVariant::Plan };
    let price = plan.price_label();
    let period = plan.period_label();

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| on_choose.call(id),

            if plan.is_popular {
                div { class: "popular-badge",
                    Glyph { icon: IconRef::material("star"), size: GlyphSize::Small }
                    span { "Самый популярный" }
                }
            }

            div { class: "plan-header",
                span { class: "plan-name", "{plan.name}" }
                div { class: "plan-price",
                    span { class: "price", "{price}" }
                    span { class: "period", "{period}" }
                }
            }

            if let Some(savings) = plan.savings {
                div { class: "plan-savings", "{savings}" }
            }

            Button {
                variant: variant,
                class: "plan-cta".to_string(),
                Glyph { icon: IconRef::material("play-arrow"), size: GlyphSize::Small }
                " Попробовать бесплатно"
            }
        }
    }
}
