//! # credscrub
//!
//! Credential extraction, out-of-band storage, and reference resolution
//! for table ingestion configurations.
//!
//! Data-source configurations (Kafka streams, JDBC pulls, object-store
//! batches) carry credentials inline as plain string fields. This crate
//! pulls those fields out before the configuration is persisted, parks
//! them in a pluggable secret store, and re-inlines them at load time:
//!
//! ```text
//! write path:  config ──extract──> (credentials, config w/ placeholders)
//!                     ──store────> secret store
//!                     ──replace──> config w/ SECRET:<key> references
//!
//! read path:   config w/ references ──fetch + re-inline──> resolved config
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use credscrub::{
//!     create_secret_store, resolve_table_config, store_table_credentials, Config,
//!     CredentialClassifier, TableConfig,
//! };
//!
//! # async fn run(mut table: TableConfig) -> credscrub::Result<()> {
//! let config = Config::from_env()?;
//! let store = create_secret_store(&config.secrets).await?;
//! let classifier = CredentialClassifier::new();
//!
//! // Before persisting the table config:
//! store_table_credentials(&mut table, store.as_ref(), &classifier, &config.secrets.path_prefix)
//!     .await?;
//!
//! // At load time:
//! let resolved = resolve_table_config(&table, store.as_ref()).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types and operations
pub use config::{Config, SecretTransport, SecretsConfig};
pub use credentials::{
    extract_credentials, resolve_table_config, store_table_credentials, table_credentials_path,
    CredentialClassifier, CredentialMap, CREDENTIAL_FIELDS_KEY, PLACEHOLDER,
    SECRET_REFERENCE_PREFIX,
};
pub use domain::{SourceConfig, SourceKind, TableConfig};
pub use errors::{Error, Result};
pub use observability::init_tracing;
pub use secrets::{
    create_secret_store, HttpSecretStore, NoOpSecretStore, RpcSecretStore, SecretStore,
    SecretStoreError, SecretString,
};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
