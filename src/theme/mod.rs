//! Visual theme for ZenPulse.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
