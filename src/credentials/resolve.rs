//! Secret reference resolution.

use tracing::warn;

use crate::domain::{source_type_of, SourceConfig, TableConfig};
use crate::secrets::{Result, SecretStore};

use super::map::{compound_key, reference_key, CredentialMap};

/// Re-inline the secret values behind every secret reference in
/// `table_config`, returning a new, fully-resolved configuration.
///
/// The input is never mutated; resolution works on a structural copy, so
/// the function is safe to call concurrently against the same
/// configuration instance. Resolution is best-effort per field: a
/// backend error, a malformed blob, or a missing compound key is logged
/// and leaves that field holding its unresolved reference. A
/// configuration without references comes back structurally equal to the
/// input. Every reference triggers a fresh backend fetch; nothing is
/// cached across calls.
pub async fn resolve_table_config(
    table_config: &TableConfig,
    secret_store: &dyn SecretStore,
) -> TableConfig {
    let mut resolved = table_config.clone();
    for (_, source_config) in resolved.source_configs_mut() {
        resolve_source(source_config, secret_store).await;
    }
    resolved
}

async fn resolve_source(source_config: &mut SourceConfig, secret_store: &dyn SecretStore) {
    let source_type = source_type_of(source_config).to_string();

    let references: Vec<(String, String)> = source_config
        .iter()
        .filter_map(|(field, value)| {
            reference_key(value).map(|key| (field.clone(), key.to_string()))
        })
        .collect();

    for (field, storage_key) in references {
        match fetch_field_value(&storage_key, &source_type, &field, secret_store).await {
            Ok(Some(value)) => {
                source_config.insert(field, value);
            }
            // Field not recorded for this source type: leave the reference.
            Ok(None) => {}
            Err(e) => {
                warn!(field = %field, source_type = %source_type, error = %e,
                    "Failed to resolve secret reference");
            }
        }
    }
}

/// The stored value for one field, or `None` if the blob does not record
/// the field as extracted for this source type.
async fn fetch_field_value(
    storage_key: &str,
    source_type: &str,
    field: &str,
    secret_store: &dyn SecretStore,
) -> Result<Option<String>> {
    let blob = secret_store.get_secret(storage_key).await?;
    let credentials = CredentialMap::from_blob(&blob)?;

    if !credentials.contains_field(source_type, field) {
        return Ok(None);
    }
    Ok(credentials.value(&compound_key(source_type, field)).map(str::to_string))
}
