//! Secret store selection from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{SecretTransport, SecretsConfig};
use crate::errors::Result;

use super::http::HttpSecretStore;
use super::noop::NoOpSecretStore;
use super::rpc::RpcSecretStore;
use super::store::SecretStore;

/// Create the secret store described by `config`.
///
/// Disabled secret management or a missing endpoint both fall back to
/// [`NoOpSecretStore`], so callers can wire the store unconditionally.
pub async fn create_secret_store(config: &SecretsConfig) -> Result<Arc<dyn SecretStore>> {
    if !config.enabled {
        info!("Secret management is disabled, using NoOpSecretStore");
        return Ok(Arc::new(NoOpSecretStore::new()));
    }

    let endpoint = match config.endpoint.as_deref() {
        Some(endpoint) if !endpoint.is_empty() => endpoint,
        _ => {
            warn!("No secret service endpoint configured, falling back to NoOpSecretStore");
            return Ok(Arc::new(NoOpSecretStore::new()));
        }
    };

    match config.transport {
        SecretTransport::Http => {
            info!(endpoint, "Creating HTTP secret store");
            Ok(Arc::new(HttpSecretStore::new(endpoint)?))
        }
        SecretTransport::Grpc => {
            info!(endpoint, "Creating RPC secret store");
            let auth_token = config.auth_token.clone().unwrap_or_default();
            Ok(Arc::new(RpcSecretStore::connect(endpoint, auth_token).await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_yields_noop() {
        let config = SecretsConfig::default();
        let store = create_secret_store(&config).await.unwrap();

        // NoOp behavior: store echoes the name, get returns an empty object.
        assert_eq!(store.store_secret("name", "value").await.unwrap(), "name");
        assert_eq!(store.get_secret("name").await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_enabled_without_endpoint_falls_back_to_noop() {
        let config = SecretsConfig { enabled: true, ..SecretsConfig::default() };
        let store = create_secret_store(&config).await.unwrap();
        assert_eq!(store.store_secret("name", "value").await.unwrap(), "name");
    }

    #[tokio::test]
    async fn test_http_transport_builds_from_valid_endpoint() {
        let config = SecretsConfig {
            enabled: true,
            endpoint: Some("http://localhost:9000".to_string()),
            ..SecretsConfig::default()
        };
        // Construction does no I/O for the HTTP transport.
        create_secret_store(&config).await.unwrap();
    }
}
