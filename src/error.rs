//! Error types for the feedback client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Rejections reported by the remote service are not errors: they come back as
//! [`ApiResponse::Failure`](crate::client::ApiResponse::Failure).

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur before or while talking to the API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request failed local validation and was never sent
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to encode the payload or parse the response
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::MissingVar("CLARIFAI_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CLARIFAI_API_KEY"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: ClientError = ValidationError::MissingImage.into();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
        assert!(err.to_string().starts_with("Invalid request:"));
    }
}
