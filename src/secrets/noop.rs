//! No-op secret store used when secret management is disabled.

use async_trait::async_trait;
use tracing::info;

use super::error::Result;
use super::store::SecretStore;

/// A secret store that does not actually store anything.
///
/// This is the default backend when secret management is disabled:
/// `store_secret` echoes the logical name back as the key and `get_secret`
/// returns an empty JSON object, so both the write and the read path
/// degrade to no-ops without special-casing in callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSecretStore;

impl NoOpSecretStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretStore for NoOpSecretStore {
    async fn store_secret(&self, name: &str, _value: &str) -> Result<String> {
        info!(name, "Secret management disabled, not storing secret");
        Ok(name.to_string())
    }

    async fn get_secret(&self, key: &str) -> Result<String> {
        info!(key, "Secret management disabled, not retrieving secret");
        Ok("{}".to_string())
    }

    async fn update_secret(&self, key: &str, _value: &str) -> Result<()> {
        info!(key, "Secret management disabled, not updating secret");
        Ok(())
    }

    async fn delete_secret(&self, key: &str) -> Result<()> {
        info!(key, "Secret management disabled, not deleting secret");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_echoes_name() {
        let store = NoOpSecretStore::new();
        let key = store.store_secret("tables/foo_OFFLINE/credentials", "blob").await.unwrap();
        assert_eq!(key, "tables/foo_OFFLINE/credentials");
    }

    #[tokio::test]
    async fn test_get_returns_empty_object() {
        let store = NoOpSecretStore::new();
        assert_eq!(store.get_secret("any-key").await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_update_and_delete_are_noops() {
        let store = NoOpSecretStore::new();
        store.update_secret("any-key", "value").await.unwrap();
        store.delete_secret("any-key").await.unwrap();
    }
}
