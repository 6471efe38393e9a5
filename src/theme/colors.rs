//! Color constants for the ZenPulse palette.
//!
//! Mirrors the CSS custom properties in [`GLOBAL_STYLES`](super::GLOBAL_STYLES).

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT: &str = "#1a1a2e";
pub const CARD: &str = "#2a2a3e";
pub const CARD_LOCKED: &str = "#3a3a4e";

// === ACCENT ===
pub const PERIWINKLE: &str = "#667eea";
pub const PERIWINKLE_SOFT: &str = "rgba(102, 126, 234, 0.1)";

// === PAYWALL GRADIENT ===
pub const PINK: &str = "#f093fb";
pub const CORAL: &str = "#f5576c";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_MUTED: &str = "#888888";
pub const TEXT_DIM: &str = "#666666";

// === SEMANTIC ===
pub const PREMIUM: &str = "#ffd700";
pub const SAVINGS: &str = "#4caf50";
