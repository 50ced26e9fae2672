//! Crate-level error types.

use thiserror::Error;

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by configuration loading and backend bootstrap.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Secret store errors.
    #[error(transparent)]
    SecretStore(#[from] crate::secrets::SecretStoreError),
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}
