//! HTTP secret service backend.
//!
//! Speaks the secret service's REST protocol: one synchronous
//! request/response per operation against `{base}/secrets/{name}`, with
//! secret values carried in a `{"value": ...}` JSON envelope. Status codes
//! map directly to success or failure; failures carry the response body as
//! the diagnostic.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use super::error::{Result, SecretStoreError};
use super::store::SecretStore;

/// JSON envelope wrapping a secret value on the wire.
#[derive(Serialize)]
struct SecretEnvelope<'a> {
    value: &'a str,
}

/// Secret store backed by a REST secret service.
#[derive(Debug, Clone)]
pub struct HttpSecretStore {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpSecretStore {
    /// Create a client for the secret service at `endpoint`.
    ///
    /// # Errors
    ///
    /// [`SecretStoreError::InvalidEndpoint`] if the endpoint is not an
    /// absolute URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized =
            if endpoint.ends_with('/') { endpoint.to_string() } else { format!("{}/", endpoint) };
        let base_url = Url::parse(&normalized)
            .map_err(|e| SecretStoreError::invalid_endpoint(endpoint, e.to_string()))?;
        Ok(Self { base_url, client: reqwest::Client::new() })
    }

    fn secret_url(&self, name: &str) -> Result<Url> {
        self.base_url
            .join(&format!("secrets/{}", name))
            .map_err(|e| SecretStoreError::invalid_endpoint(name, e.to_string()))
    }

    async fn failure(operation: &str, response: reqwest::Response) -> SecretStoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        SecretStoreError::backend(format!(
            "failed to {} secret, status: {}, response: {}",
            operation, status, body
        ))
    }
}

#[async_trait]
impl SecretStore for HttpSecretStore {
    async fn store_secret(&self, name: &str, value: &str) -> Result<String> {
        let url = self.secret_url(name)?;
        let response = self
            .client
            .post(url)
            .json(&SecretEnvelope { value })
            .send()
            .await
            .map_err(|e| SecretStoreError::connection(format!("error storing secret: {}", e)))?;

        if response.status() != StatusCode::OK && response.status() != StatusCode::CREATED {
            return Err(Self::failure("store", response).await);
        }
        Ok(name.to_string())
    }

    async fn get_secret(&self, key: &str) -> Result<String> {
        let url = self.secret_url(key)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SecretStoreError::connection(format!("error retrieving secret: {}", e)))?;

        if response.status() != StatusCode::OK {
            return Err(Self::failure("retrieve", response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| SecretStoreError::connection(format!("error reading secret: {}", e)))?;
        let root: serde_json::Value = serde_json::from_str(&body)?;
        root.get("value")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| SecretStoreError::backend("secret response did not contain a value field"))
    }

    async fn update_secret(&self, key: &str, value: &str) -> Result<()> {
        let url = self.secret_url(key)?;
        let response = self
            .client
            .put(url)
            .json(&SecretEnvelope { value })
            .send()
            .await
            .map_err(|e| SecretStoreError::connection(format!("error updating secret: {}", e)))?;

        if response.status() != StatusCode::OK {
            return Err(Self::failure("update", response).await);
        }
        Ok(())
    }

    async fn delete_secret(&self, key: &str) -> Result<()> {
        let url = self.secret_url(key)?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| SecretStoreError::connection(format!("error deleting secret: {}", e)))?;

        if response.status() != StatusCode::OK && response.status() != StatusCode::NO_CONTENT {
            return Err(Self::failure("delete", response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_trailing_slash() {
        let with = HttpSecretStore::new("http://localhost:9000/").unwrap();
        let without = HttpSecretStore::new("http://localhost:9000").unwrap();
        assert_eq!(with.base_url, without.base_url);
    }

    #[test]
    fn test_new_rejects_relative_endpoint() {
        let err = HttpSecretStore::new("not a url").unwrap_err();
        assert!(matches!(err, SecretStoreError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_secret_url_keeps_path_segments() {
        let store = HttpSecretStore::new("http://localhost:9000/api").unwrap();
        let url = store.secret_url("prod/tables/foo_OFFLINE/credentials").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/secrets/prod/tables/foo_OFFLINE/credentials"
        );
    }
}
