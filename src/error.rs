//! Error types used by the dispatcher, its handlers and the value model.
//!
//! This module defines three main error enums:
//!
//! - [`HandlerError`]: raised by an individual handler while processing a message.
//! - [`DispatchError`]: raised by [`Dispatcher::publish`](crate::Dispatcher::publish)
//!   when a handler fails; wraps the handler's error with its position.
//! - [`ValueError`]: raised when a [`Value`](crate::Value) cannot be expressed as JSON.
//!
//! All of them provide helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

use crate::dispatch::Level;

/// # Errors produced by a single handler.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Writing the message to an output sink failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The handler refused to process the message.
    #[error("handler rejected message: {reason}")]
    Rejected {
        /// Human-readable reason.
        reason: String,
    },
}

impl HandlerError {
    /// Shorthand for [`HandlerError::Rejected`].
    pub fn rejected(reason: impl Into<String>) -> Self {
        HandlerError::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use blockfold::HandlerError;
    ///
    /// let err = HandlerError::rejected("too long");
    /// assert_eq!(err.as_label(), "handler_rejected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Io(_) => "handler_io",
            HandlerError::Rejected { .. } => "handler_rejected",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Io(err) => format!("io: {err}"),
            HandlerError::Rejected { reason } => format!("rejected: {reason}"),
        }
    }
}

/// # Errors produced by publishing a message.
///
/// A failing handler's error is propagated to the caller of `publish`
/// together with the level, the handler's registration position and its name.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A handler registered for `level` returned an error.
    #[error("handler '{handler}' (#{position}) for level {level} failed: {source}")]
    Handler {
        /// Level the message was published at.
        level: Level,
        /// Zero-based registration position of the failing handler.
        position: usize,
        /// Name reported by the failing handler.
        handler: String,
        /// The handler's own error.
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Handler { .. } => "dispatch_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::Handler {
                level,
                position,
                handler,
                source,
            } => format!(
                "level={level} handler={handler} position={position} cause={}",
                source.as_message()
            ),
        }
    }

    /// Level the failed publish targeted.
    pub fn level(&self) -> Level {
        match self {
            DispatchError::Handler { level, .. } => *level,
        }
    }

    /// Registration position of the handler that failed.
    pub fn position(&self) -> usize {
        match self {
            DispatchError::Handler { position, .. } => *position,
        }
    }
}

/// # Errors produced when converting a [`Value`](crate::Value) to JSON.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ValueError {
    /// JSON has no representation for NaN or infinite floats.
    #[error("non-finite number {value} has no JSON representation")]
    NonFiniteNumber {
        /// The offending float.
        value: f64,
    },

    /// Encoding through `serde_json` failed.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValueError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ValueError::NonFiniteNumber { .. } => "value_non_finite",
            ValueError::Json(_) => "value_json",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ValueError::NonFiniteNumber { value } => format!("non-finite: {value}"),
            ValueError::Json(err) => format!("json: {err}"),
        }
    }
}

/// Returned by [`Level::from_str`](std::str::FromStr) for unknown names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown level '{input}' (expected info, warning or error)")]
pub struct ParseLevelError {
    /// The rejected input.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HandlerError = io.into();
        assert_eq!(err.as_label(), "handler_io");
        assert!(err.as_message().contains("pipe closed"));
    }

    #[test]
    fn test_dispatch_error_display_names_handler() {
        let err = DispatchError::Handler {
            level: Level::Warning,
            position: 2,
            handler: "audit".to_string(),
            source: HandlerError::rejected("disk full"),
        };
        assert_eq!(
            err.to_string(),
            "handler 'audit' (#2) for level warning failed: handler rejected message: disk full"
        );
        assert_eq!(err.level(), Level::Warning);
        assert_eq!(err.position(), 2);
        assert_eq!(err.as_label(), "dispatch_handler_failed");
    }

    #[test]
    fn test_dispatch_error_exposes_source() {
        use std::error::Error as _;

        let err = DispatchError::Handler {
            level: Level::Info,
            position: 0,
            handler: "h".to_string(),
            source: HandlerError::rejected("no"),
        };
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("handler rejected message: no"));
    }

    #[test]
    fn test_value_error_labels() {
        let err = ValueError::NonFiniteNumber { value: f64::NAN };
        assert_eq!(err.as_label(), "value_non_finite");
        assert_eq!(err.as_message(), "non-finite: NaN");
    }
}
