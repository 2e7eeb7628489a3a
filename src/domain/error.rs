//! Error types for the Memefinder plugin.
//!
//! This module defines the centralized error type [`MemefinderError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Memefinder plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from backend communication to configuration and theme issues.
/// Variants that wrap underlying errors from external crates use `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use memefinder::MemefinderError;
///
/// fn validate_config() -> Result<(), MemefinderError> {
///     Err(MemefinderError::Config("missing backend_url".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MemefinderError {
    /// The backend answered with a non-success HTTP status.
    ///
    /// The search settles as a failure; the previously displayed results
    /// are kept as-is.
    #[error("Backend returned status {status}")]
    BackendStatus {
        /// HTTP status code from the response.
        status: u16,
    },

    /// The backend response body could not be parsed.
    ///
    /// Wraps errors from `serde_json`. Automatically converts using the
    /// `#[from]` attribute.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend response body was not valid UTF-8.
    #[error("Response encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (trace file
    /// handling). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Memefinder operations.
///
/// This is a type alias for `std::result::Result<T, MemefinderError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MemefinderError>;
