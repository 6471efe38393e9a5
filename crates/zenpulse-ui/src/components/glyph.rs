//! Glyph Component
//!
//! Renders a resolved [`IconRef`]. The glyph was picked when the catalog was
//! built, so this component never looks at the icon family itself.

use dioxus::prelude::*;
use zenpulse_core::IconRef;

/// Glyph sizes, in CSS pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GlyphSize {
    /// Header badges
    Small,
    /// Feature tiles and moods
    #[default]
    Medium,
    /// Meditation cards
    Large,
    /// Paywall hero
    Hero,
}

impl GlyphSize {
    pub fn px(&self) -> u32 {
        match self {
            GlyphSize::Small => 14,
            GlyphSize::Medium => 24,
            GlyphSize::Large => 32,
            GlyphSize::Hero => 60,
        }
    }
}

/// Properties for the Glyph component
#[derive(Clone, PartialEq, Props)]
pub struct GlyphProps {
    pub icon: IconRef,
    #[props(default)]
    pub size: GlyphSize,
    /// Render in the muted color (locked content)
    #[props(default = false)]
    pub muted: bool,
}

/// Icon glyph
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Glyph { icon: meditation.icon, size: GlyphSize::Large }
/// }
/// ```
#[component]
pub fn Glyph(props: GlyphProps) -> Element {
    let class = if props.muted {
        format!("glyph {} muted", props.icon.class())
    } else {
        format!("glyph {}", props.icon.class())
    };
    let px = props.size.px();

    rsx! {
        span {
            class: "{class}",
            style: "font-size: {px}px;",
            "data-icon": "{props.icon.name}",
            "aria-hidden": "true",
            "{props.icon.glyph}"
        }
    }
}
