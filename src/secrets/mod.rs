//! Secret store backends.
//!
//! This module defines the backend contract used to keep credential
//! values out of table configurations: a [`SecretStore`] provides
//! `store`/`get`/`update`/`delete` over opaque blobs addressed by string
//! keys, and the credential protocol in [`crate::credentials`] is written
//! against that trait alone.
//!
//! # Backends
//!
//! - [`NoOpSecretStore`] — used when secret management is disabled; keeps
//!   both the write and the read path total without persisting anything.
//! - [`HttpSecretStore`] — REST secret service speaking the
//!   `{"value": ...}` envelope protocol.
//! - [`RpcSecretStore`] — `SecretManager` RPC service; carries a metadata
//!   map per secret and authenticates each call with caller-supplied
//!   token material.
//!
//! [`create_secret_store`] selects a backend from [`crate::config::SecretsConfig`].

pub mod error;
pub mod factory;
pub mod http;
pub mod noop;
pub mod rpc;
pub mod store;
pub mod types;

pub use error::{Result, SecretStoreError};
pub use factory::create_secret_store;
pub use http::HttpSecretStore;
pub use noop::NoOpSecretStore;
pub use rpc::{RpcSecretStore, SecretManagerClient};
pub use store::SecretStore;
pub use types::SecretString;
