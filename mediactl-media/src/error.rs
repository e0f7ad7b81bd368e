//! Media control error types and handling
//!
//! Media playback failures reported by a [`PlayerService`](crate::player::PlayerService)
//! are plain values ([`PlayerError`](crate::player::PlayerError)) surfaced through
//! player events. The types here cover failures of the control layer itself.

use thiserror::Error;

/// Main error type for media control operations
#[derive(Error, Debug)]
pub enum MediaError {
    /// The control that owned the message queue has been dropped
    #[error("Control closed: {control}")]
    ControlClosed {
        /// Control name
        control: String,
    },

    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },

    /// Logging could not be initialised
    #[error("Logging initialisation failed: {reason}")]
    LoggingInit {
        /// Failure reason
        reason: String,
    },
}

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;

impl MediaError {
    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            MediaError::ControlClosed { .. } => false,
            MediaError::InvalidConfiguration { .. } => false,
            MediaError::LoggingInit { .. } => true,
        }
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            MediaError::ControlClosed { .. } => ErrorCategory::State,
            MediaError::InvalidConfiguration { .. } => ErrorCategory::Configuration,
            MediaError::LoggingInit { .. } => ErrorCategory::System,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// System-level errors
    System,
    /// Configuration and parameter errors
    Configuration,
    /// State management errors
    State,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let closed = MediaError::ControlClosed {
            control: "player".to_string(),
        };
        assert_eq!(closed.category(), ErrorCategory::State);
        assert!(!closed.is_recoverable());

        let logging = MediaError::LoggingInit {
            reason: "subscriber already set".to_string(),
        };
        assert_eq!(logging.category(), ErrorCategory::System);
        assert!(logging.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let error = MediaError::InvalidConfiguration {
            message: "initial volume 120 out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: initial volume 120 out of range"
        );
    }
}
