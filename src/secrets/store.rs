//! Core secret store trait.

use async_trait::async_trait;

use super::error::Result;

/// Backend contract for out-of-band secret storage.
///
/// Implementations must be `Send + Sync`; they are shared behind an `Arc`
/// between the write path (store-and-replace) and the read path (reference
/// resolution). The store owns the durable copy of every secret value —
/// callers keep only the reference key.
///
/// # Security Considerations
///
/// - Implementations MUST NOT log secret values
/// - Network communication MUST use TLS outside of tests
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Store a secret under a logical name.
    ///
    /// Returns the storage key under which the secret can later be
    /// retrieved. Implementations may return the name unchanged or
    /// transform it; the only guarantee is that the returned key resolves
    /// via [`get_secret`](Self::get_secret).
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::Backend`](super::SecretStoreError::Backend) or
    /// [`SecretStoreError::Connection`](super::SecretStoreError::Connection)
    /// if the secret cannot be persisted.
    async fn store_secret(&self, name: &str, value: &str) -> Result<String>;

    /// Retrieve a secret by its storage key.
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::NotFound`](super::SecretStoreError::NotFound) if
    /// the key does not resolve, transport errors otherwise.
    async fn get_secret(&self, key: &str) -> Result<String>;

    /// Replace the value stored under an existing key.
    async fn update_secret(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a secret that is no longer needed.
    async fn delete_secret(&self, key: &str) -> Result<()>;
}
