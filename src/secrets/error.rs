//! Error types for secret store operations.

use thiserror::Error;

/// Result type for secret store operations.
pub type Result<T> = std::result::Result<T, SecretStoreError>;

/// Errors raised by secret store backends and the credential protocol
/// built on top of them.
#[derive(Error, Debug)]
pub enum SecretStoreError {
    /// Secret not found in the backend.
    #[error("Secret not found: {key}")]
    NotFound { key: String },

    /// Failed to reach the secret service.
    #[error("Secret service connection failed: {message}")]
    Connection { message: String },

    /// The secret service rejected the caller's authorization material.
    #[error("Secret service authentication failed: {message}")]
    Auth { message: String },

    /// The backend reported a failure; `message` carries the diagnostic
    /// (HTTP status and response body, or gRPC status).
    #[error("Secret store backend error: {message}")]
    Backend { message: String },

    /// The configured secret service endpoint could not be parsed.
    #[error("Invalid secret service endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Serialization of a credential blob failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SecretStoreError {
    /// Create a not found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into() }
    }

    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint { endpoint: endpoint.into(), reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = SecretStoreError::not_found("tables/foo_OFFLINE/credentials");
        assert!(matches!(err, SecretStoreError::NotFound { .. }));
        assert_eq!(err.to_string(), "Secret not found: tables/foo_OFFLINE/credentials");

        let err = SecretStoreError::connection("timeout");
        assert!(matches!(err, SecretStoreError::Connection { .. }));

        let err = SecretStoreError::invalid_endpoint("not a url", "relative URL without a base");
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SecretStoreError::from(json_err);
        assert!(matches!(err, SecretStoreError::Serialization(_)));
    }
}
