//! The credential protection protocol.
//!
//! Table ingestion definitions embed data-source configurations that mix
//! plain settings with credentials. This module keeps the credentials out
//! of the stored configuration:
//!
//! - **Write path**: [`extract_credentials`] classifies and pulls
//!   credential fields into a [`CredentialMap`];
//!   [`store_table_credentials`] persists that map as one blob in a
//!   [`SecretStore`](crate::secrets::SecretStore) and rewrites the
//!   extracted fields as `SECRET:<key>` references.
//! - **Read path**: [`resolve_table_config`] fetches the blob behind each
//!   reference and re-inlines the original values into a fresh copy of
//!   the configuration.
//!
//! The write path fails loudly (a backend error aborts the operation);
//! the read path degrades quietly (a failing field keeps its reference).
//! That asymmetry is part of the contract: persisting a half-protected
//! configuration is unsafe, serving a partially-resolved one is not.

pub mod classifier;
pub mod extract;
pub mod map;
pub mod protect;
pub mod resolve;

pub use classifier::CredentialClassifier;
pub use extract::extract_credentials;
pub use map::{
    compound_key, reference_key, secret_reference, CredentialMap, CREDENTIAL_FIELDS_KEY,
    PLACEHOLDER, SECRET_REFERENCE_PREFIX,
};
pub use protect::{store_table_credentials, table_credentials_path};
pub use resolve::resolve_table_config;
