//! Error types for the Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report. Once a request passes
//! validation the calculators are total, so [`EngineError::Validation`] is
//! the only variant a settlement calculation can return.

use thiserror::Error;

/// The main error type for the Settlement Engine.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "ordinary_salary".to_string(),
///     message: "must be greater than 0".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid request field 'ordinary_salary': must be greater than 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A request field violated one of the settlement invariants.
    #[error("Invalid request field '{field}': {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the calculators cannot use.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfig {
        /// The configuration key that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building a [`EngineError::InvalidConfig`].
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the offending field name for validation and config errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::InvalidConfig { field, .. } => Some(field),
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. } => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
