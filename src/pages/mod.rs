//! Page components for ZenPulse.

mod meditations;
mod paywall;

pub use meditations::Meditations;
pub use paywall::Paywall;
