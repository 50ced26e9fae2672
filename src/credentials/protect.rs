//! Store-and-replace: persisting extracted credentials out of band.

use tracing::{error, info};

use crate::domain::TableConfig;
use crate::secrets::{Result, SecretStore};

use super::classifier::CredentialClassifier;
use super::extract::extract_credentials;
use super::map::{secret_reference, PLACEHOLDER};

/// Canonical storage path for a table's credentials.
pub fn table_credentials_path(table_name: &str, path_prefix: &str) -> String {
    format!("{}tables/{}/credentials", path_prefix, table_name)
}

/// Extract the table's credentials, persist them in `secret_store`, and
/// replace every extracted field with a secret reference.
///
/// Returns `Ok(true)` if credentials were stored, `Ok(false)` if the
/// configuration contained none (no backend call is made in that case).
///
/// # Errors
///
/// A backend failure aborts the whole operation: no reference replacement
/// is committed and the error is returned. Extraction has already swapped
/// placeholders into the configuration by then — the caller must treat
/// the config as spoiled and discard it rather than retry in place.
pub async fn store_table_credentials(
    table_config: &mut TableConfig,
    secret_store: &dyn SecretStore,
    classifier: &CredentialClassifier,
    path_prefix: &str,
) -> Result<bool> {
    let credentials = extract_credentials(table_config, classifier);
    if credentials.is_empty() {
        return Ok(false);
    }

    let secret_path = table_credentials_path(&table_config.table_name, path_prefix);
    let blob = credentials.to_blob()?;

    let storage_key = match secret_store.store_secret(&secret_path, &blob).await {
        Ok(key) => key,
        Err(e) => {
            error!(table = %table_config.table_name, error = %e, "Failed to store table credentials");
            return Err(e);
        }
    };

    let reference = secret_reference(&storage_key);
    for (_, source_config) in table_config.source_configs_mut() {
        for value in source_config.values_mut() {
            if value == PLACEHOLDER {
                *value = reference.clone();
            }
        }
    }

    info!(
        table = %table_config.table_name,
        count = credentials.len(),
        "Stored table credentials out of band"
    );
    Ok(true)
}
