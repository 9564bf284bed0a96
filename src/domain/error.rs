//! Error types for the HirePoint plugin.
//!
//! This module defines the centralized error type [`HirepointError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Failures of the remote gateway calls are deliberately *not* part of this enum:
//! they are settled into [`crate::gateway::GatewayError`] and surfaced to the user
//! as notifications instead of being propagated.

use thiserror::Error;

/// The main error type for HirePoint plugin operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use hirepoint::HirepointError;
///
/// fn validate_config() -> Result<(), HirepointError> {
///     Err(HirepointError::Config("api_base must not be empty".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum HirepointError {
    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A payload exchanged with the host could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An outgoing request could not be built.
    #[error("Request error: {0}")]
    Request(String),
}

/// A specialized `Result` type for HirePoint operations.
pub type Result<T> = std::result::Result<T, HirepointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn open_missing() -> Result<()> {
            std::fs::read_to_string("/definitely/not/here/hirepoint.toml")?;
            Ok(())
        }

        let err = open_missing().unwrap_err();
        assert!(matches!(err, HirepointError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn json_errors_convert_with_question_mark() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{not json")?)
        }

        assert!(matches!(parse().unwrap_err(), HirepointError::Json(_)));
    }
}
