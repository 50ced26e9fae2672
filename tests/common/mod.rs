//! Shared secret store test doubles.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use credscrub::{SecretStore, SecretStoreError};

type Result<T> = std::result::Result<T, SecretStoreError>;

/// In-memory secret store tracking call counts.
#[derive(Default)]
pub struct InMemorySecretStore {
    secrets: Mutex<HashMap<String, String>>,
    pub store_calls: Mutex<usize>,
    pub get_calls: Mutex<usize>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn secret(&self, key: &str) -> Option<String> {
        self.secrets.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn store_secret(&self, name: &str, value: &str) -> Result<String> {
        *self.store_calls.lock().unwrap() += 1;
        self.secrets.lock().unwrap().insert(name.to_string(), value.to_string());
        Ok(name.to_string())
    }

    async fn get_secret(&self, key: &str) -> Result<String> {
        *self.get_calls.lock().unwrap() += 1;
        self.secrets
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| SecretStoreError::not_found(key))
    }

    async fn update_secret(&self, key: &str, value: &str) -> Result<()> {
        self.secrets.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_secret(&self, key: &str) -> Result<()> {
        self.secrets.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Secret store whose write operations always fail.
pub struct FailingSecretStore;

#[async_trait]
impl SecretStore for FailingSecretStore {
    async fn store_secret(&self, _name: &str, _value: &str) -> Result<String> {
        Err(SecretStoreError::backend("secret service unavailable"))
    }

    async fn get_secret(&self, key: &str) -> Result<String> {
        Err(SecretStoreError::not_found(key))
    }

    async fn update_secret(&self, _key: &str, _value: &str) -> Result<()> {
        Err(SecretStoreError::backend("secret service unavailable"))
    }

    async fn delete_secret(&self, _key: &str) -> Result<()> {
        Err(SecretStoreError::backend("secret service unavailable"))
    }
}
