//! ZenPulse UI Components
//!
//! Dioxus primitives shared by the ZenPulse screens.
//!
//! ## Design Philosophy
//!
//! Calm night palette with a single accent:
//! - **Periwinkle (#667eea)**: Icons, links, primary accents
//! - **Pink (#f093fb) / Coral (#f5576c)**: Paywall gradient
//! - **Night (#1a1a2e)**: Browse background
//! - **Card (#2a2a3e)**: Raised surfaces

pub mod components;

pub use components::*;
