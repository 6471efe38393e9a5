//! Reusable UI components
//!
//! Buttons and icon glyphs used across the paywall and the meditation grid.

mod button;
mod glyph;

pub use button::*;
pub use glyph::*;
