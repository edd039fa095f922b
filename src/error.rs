//! Error types for the planning engine.
//!
//! The calculation pipeline itself is total and never returns an error. These
//! errors come from the layers around it: loading and overriding constants.

use thiserror::Error;

/// The main error type for the planning engine.
///
/// # Example
///
/// ```
/// use planning_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/constants.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/constants.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A calculation constant was outside its allowed range.
    #[error("Invalid constant '{name}': {message}")]
    InvalidConstant {
        /// The name of the constant.
        name: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
