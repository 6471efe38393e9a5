//! Error types for ZenPulse

use thiserror::Error;

/// Main error type for ZenPulse operations
///
/// None of these are user-facing failures. Each one means a caller asked for
/// an identifier outside one of the closed catalogs, or the process could not
/// set up its ambient services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZenError {
    /// Mood identifier is not one of the canned-response keys
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Meditation identifier is not in the catalog
    #[error("Unknown meditation: {0}")]
    UnknownMeditation(String),

    /// Subscription plan identifier is not in the catalog
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using ZenError
pub type ZenResult<T> = Result<T, ZenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZenError::UnknownMood("sleepy".to_string());
        assert_eq!(format!("{}", err), "Unknown mood: sleepy");
    }

    #[test]
    fn test_unknown_meditation_display() {
        let err = ZenError::UnknownMeditation("42".to_string());
        assert_eq!(err.to_string(), "Unknown meditation: 42");
    }
}
