//! Console logging setup.
//!
//! ## Usage
//!
//! ```ignore
//! use zenpulse_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("zenpulse=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG`, when set, takes precedence over the builder's filter.

use tracing_subscriber::EnvFilter;

use crate::error::{ZenError, ZenResult};

/// Filter used when neither `RUST_LOG` nor a builder filter is given
pub const DEFAULT_FILTER: &str = "zenpulse=info,zenpulse_core=info";

/// Builder for the process-wide tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
        }
    }

    /// Set the filter directive (e.g., "zenpulse=info,zenpulse_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colors (for piping output to a file).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Directive this builder falls back to when `RUST_LOG` is unset
    pub fn directive(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }

    /// Build the filter without consulting the environment.
    pub fn build_filter(&self) -> ZenResult<EnvFilter> {
        EnvFilter::try_new(self.directive()).map_err(|e| ZenError::Logging(e.to_string()))
    }

    /// Install the global subscriber.
    ///
    /// Fails if a subscriber is already installed.
    pub fn init(self) -> ZenResult<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => self.build_filter()?,
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.ansi)
            .try_init()
            .map_err(|e| ZenError::Logging(e.to_string()))
    }
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive() {
        assert_eq!(LoggingBuilder::new().directive(), DEFAULT_FILTER);
        assert!(LoggingBuilder::new().build_filter().is_ok());
    }

    #[test]
    fn custom_directive() {
        let builder = LoggingBuilder::new().with_filter("zenpulse_core=debug").no_ansi();
        assert_eq!(builder.directive(), "zenpulse_core=debug");
        assert!(!builder.ansi);
        assert!(builder.build_filter().is_ok());
    }
}
