//! RPC secret service backend.
//!
//! Talks to a `SecretManager` service over tonic unary calls. Unlike the
//! REST backend, every operation carries a metadata key/value list
//! describing the secret (e.g. the owning table) and an authorization
//! message built from caller-supplied token material.
//!
//! The message types below are maintained by hand with prost derives so
//! the build carries no protoc dependency; tags and field shapes are the
//! wire contract with the service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::Code;

use super::error::{Result, SecretStoreError};
use super::store::SecretStore;
use super::types::SecretString;

/// Data-list key under which the secret value itself travels.
const SECRET_DATA_KEY: &str = "value";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretData {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub val: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretMetadataEntry {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub val: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Authorization {
    #[prost(string, tag = "1")]
    pub token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Secret {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(message, repeated, tag = "2")]
    pub data: Vec<SecretData>,
    #[prost(message, repeated, tag = "3")]
    pub metadata: Vec<SecretMetadataEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSecretRequest {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(message, optional, tag = "2")]
    pub auth: Option<Authorization>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSecretResponse {
    #[prost(message, optional, tag = "1")]
    pub secret: Option<Secret>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUpdateSecretRequest {
    #[prost(message, optional, tag = "1")]
    pub secret: Option<Secret>,
    #[prost(message, optional, tag = "2")]
    pub auth: Option<Authorization>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUpdateSecretResponse {
    #[prost(string, tag = "1")]
    pub key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSecretRequest {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(message, optional, tag = "2")]
    pub auth: Option<Authorization>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSecretResponse {}

/// Unary client for the `SecretManager` service.
#[derive(Debug, Clone)]
pub struct SecretManagerClient {
    inner: tonic::client::Grpc<Channel>,
}

impl SecretManagerClient {
    /// Connect to the secret manager at `endpoint` (e.g. `http://host:port`).
    pub async fn connect(endpoint: &str) -> Result<Self> {
        let channel = Channel::from_shared(endpoint.to_string())
            .map_err(|e| SecretStoreError::invalid_endpoint(endpoint, e.to_string()))?
            .connect()
            .await
            .map_err(|e| {
                SecretStoreError::connection(format!("failed to connect to secret service: {}", e))
            })?;
        Ok(Self::new(channel))
    }

    /// Wrap an already-established channel.
    pub fn new(channel: Channel) -> Self {
        Self { inner: tonic::client::Grpc::new(channel) }
    }

    pub async fn get_secret(
        &mut self,
        request: GetSecretRequest,
    ) -> std::result::Result<tonic::Response<GetSecretResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("secret service was not ready: {}", e))
        })?;
        let codec = tonic_prost::ProstCodec::default();
        let path = PathAndQuery::from_static("/secretmanager.v1.SecretManager/GetSecret");
        self.inner.unary(tonic::Request::new(request), path, codec).await
    }

    pub async fn create_update_secret(
        &mut self,
        request: CreateUpdateSecretRequest,
    ) -> std::result::Result<tonic::Response<CreateUpdateSecretResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("secret service was not ready: {}", e))
        })?;
        let codec = tonic_prost::ProstCodec::default();
        let path = PathAndQuery::from_static("/secretmanager.v1.SecretManager/CreateUpdateSecret");
        self.inner.unary(tonic::Request::new(request), path, codec).await
    }

    pub async fn delete_secret(
        &mut self,
        request: DeleteSecretRequest,
    ) -> std::result::Result<tonic::Response<DeleteSecretResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("secret service was not ready: {}", e))
        })?;
        let codec = tonic_prost::ProstCodec::default();
        let path = PathAndQuery::from_static("/secretmanager.v1.SecretManager/DeleteSecret");
        self.inner.unary(tonic::Request::new(request), path, codec).await
    }
}

/// Secret store backed by the `SecretManager` RPC service.
///
/// The richer `*_with_metadata` methods expose the service's metadata
/// channel; the plain [`SecretStore`] impl delegates with empty metadata.
#[derive(Debug, Clone)]
pub struct RpcSecretStore {
    client: SecretManagerClient,
    auth_token: SecretString,
}

impl RpcSecretStore {
    pub fn new(client: SecretManagerClient, auth_token: SecretString) -> Self {
        Self { client, auth_token }
    }

    /// Connect to the secret manager and authenticate subsequent calls
    /// with `auth_token`.
    pub async fn connect(endpoint: &str, auth_token: SecretString) -> Result<Self> {
        Ok(Self::new(SecretManagerClient::connect(endpoint).await?, auth_token))
    }

    fn authorization(&self) -> Option<Authorization> {
        Some(Authorization { token: self.auth_token.expose_secret().to_string() })
    }

    fn build_secret(path: &str, value: &str, metadata: &BTreeMap<String, String>) -> Secret {
        Secret {
            path: path.to_string(),
            data: vec![SecretData { key: SECRET_DATA_KEY.to_string(), val: value.to_string() }],
            metadata: metadata
                .iter()
                .map(|(k, v)| SecretMetadataEntry { key: k.clone(), val: v.clone() })
                .collect(),
        }
    }

    /// Store a secret along with descriptive metadata. The path serves as
    /// the storage key.
    pub async fn store_secret_with_metadata(
        &self,
        name: &str,
        value: &str,
        metadata: &BTreeMap<String, String>,
    ) -> Result<String> {
        let request = CreateUpdateSecretRequest {
            secret: Some(Self::build_secret(name, value, metadata)),
            auth: self.authorization(),
        };
        // Channel clones share the underlying connection.
        let mut client = self.client.clone();
        client.create_update_secret(request).await.map_err(|s| status_to_error(s, name))?;
        Ok(name.to_string())
    }

    /// Retrieve a secret value together with its stored metadata.
    pub async fn get_secret_with_metadata(
        &self,
        key: &str,
    ) -> Result<(String, BTreeMap<String, String>)> {
        let request = GetSecretRequest { path: key.to_string(), auth: self.authorization() };
        let mut client = self.client.clone();
        let response = client.get_secret(request).await.map_err(|s| status_to_error(s, key))?;
        let secret = response
            .into_inner()
            .secret
            .ok_or_else(|| SecretStoreError::backend("secret missing from response"))?;
        let value = secret
            .data
            .into_iter()
            .find(|d| d.key == SECRET_DATA_KEY)
            .map(|d| d.val)
            .ok_or_else(|| SecretStoreError::backend("secret value not found in response"))?;
        let metadata = secret.metadata.into_iter().map(|m| (m.key, m.val)).collect();
        Ok((value, metadata))
    }

    /// Replace an existing secret, updating its metadata alongside.
    pub async fn update_secret_with_metadata(
        &self,
        key: &str,
        value: &str,
        metadata: &BTreeMap<String, String>,
    ) -> Result<()> {
        self.store_secret_with_metadata(key, value, metadata).await.map(|_| ())
    }
}

#[async_trait]
impl SecretStore for RpcSecretStore {
    async fn store_secret(&self, name: &str, value: &str) -> Result<String> {
        self.store_secret_with_metadata(name, value, &BTreeMap::new()).await
    }

    async fn get_secret(&self, key: &str) -> Result<String> {
        self.get_secret_with_metadata(key).await.map(|(value, _)| value)
    }

    async fn update_secret(&self, key: &str, value: &str) -> Result<()> {
        self.update_secret_with_metadata(key, value, &BTreeMap::new()).await
    }

    async fn delete_secret(&self, key: &str) -> Result<()> {
        let request = DeleteSecretRequest { path: key.to_string(), auth: self.authorization() };
        let mut client = self.client.clone();
        client.delete_secret(request).await.map_err(|s| status_to_error(s, key))?;
        Ok(())
    }
}

fn status_to_error(status: tonic::Status, key: &str) -> SecretStoreError {
    match status.code() {
        Code::NotFound => SecretStoreError::not_found(key),
        Code::Unauthenticated | Code::PermissionDenied => {
            SecretStoreError::auth(status.message().to_string())
        }
        Code::Unavailable => {
            SecretStoreError::connection(format!("secret service unavailable: {}", status.message()))
        }
        _ => SecretStoreError::backend(format!("secret service error: {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_secret_carries_value_and_metadata() {
        let metadata =
            BTreeMap::from([("table".to_string(), "events_REALTIME".to_string())]);
        let secret = RpcSecretStore::build_secret("tables/events/credentials", "blob", &metadata);

        assert_eq!(secret.path, "tables/events/credentials");
        assert_eq!(secret.data.len(), 1);
        assert_eq!(secret.data[0].key, "value");
        assert_eq!(secret.data[0].val, "blob");
        assert_eq!(secret.metadata.len(), 1);
        assert_eq!(secret.metadata[0].key, "table");
    }

    #[test]
    fn test_status_mapping() {
        let err = status_to_error(tonic::Status::not_found("missing"), "k");
        assert!(matches!(err, SecretStoreError::NotFound { .. }));

        let err = status_to_error(tonic::Status::unauthenticated("bad token"), "k");
        assert!(matches!(err, SecretStoreError::Auth { .. }));

        let err = status_to_error(tonic::Status::internal("boom"), "k");
        assert!(matches!(err, SecretStoreError::Backend { .. }));
    }
}
