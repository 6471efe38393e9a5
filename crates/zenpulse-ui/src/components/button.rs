//! Button Components
//!
//! Button styles used by the screens:
//! - Primary: Filled accent button
//! - Plan: Call-to-action inside a plan card
//! - Popular: Plan call-to-action on the highlighted plan
//! - Ghost: Transparent, used for "continue free"
//! - Fab: Round floating action button

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent background
    #[default]
    Primary,
    /// White pill with accent text
    Plan,
    /// Accent pill with white text
    Popular,
    /// Transparent with a light border
    Ghost,
    /// Round floating button pinned to the corner
    Fab,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Plan => "btn-plan",
            ButtonVariant::Popular => "btn-plan popular",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Fab => "btn-fab",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label, for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         onclick: move |_| on_go_free.call(()),
///         "Продолжить без подписки"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let aria_label = props.aria_label.clone().unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{aria_label}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon-only header actions
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconAction {
    /// Closes a modal
    Close,
    /// Leaves the meditation grid
    Back,
}

impl IconAction {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconAction::Close => "\u{2715}",
            IconAction::Back => "\u{2190}",
        }
    }

    /// Screen-reader label
    pub fn label(&self) -> &'static str {
        match self {
            IconAction::Close => "Закрыть",
            IconAction::Back => "Назад",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            IconAction::Close => "icon-btn close-btn",
            IconAction::Back => "icon-btn back-btn",
        }
    }
}

/// Compact icon-only button
#[component]
pub fn IconButton(action: IconAction, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: action.class(),
            r#type: "button",
            "aria-label": action.label(),
            onclick: move |_| onclick.call(()),
            "{action.glyph()}"
        }
    }
}

/// Join a base class with optional extra classes
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
