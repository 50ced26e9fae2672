//! Credential extraction from table configurations.

use tracing::debug;

use crate::domain::{SourceConfig, TableConfig, UNKNOWN_SOURCE_TYPE};

use super::classifier::CredentialClassifier;
use super::map::{CredentialMap, PLACEHOLDER};

/// Pull every credential-bearing field out of the table's batch and
/// stream source configurations.
///
/// Matching fields are collected into the returned [`CredentialMap`] and
/// overwritten in place with the placeholder sentinel; the caller is
/// expected to replace the placeholders with secret references once the
/// map has been stored. If nothing matches, the configuration is left
/// untouched and the returned map is empty.
///
/// Mutates `table_config` through `&mut`; callers holding the same
/// configuration on other threads must serialize access (the borrow
/// checker enforces this for safe code).
pub fn extract_credentials(
    table_config: &mut TableConfig,
    classifier: &CredentialClassifier,
) -> CredentialMap {
    let mut credentials = CredentialMap::new();

    for (kind, source_config) in table_config.source_configs_mut() {
        let source_type = source_config
            .get(kind.type_field())
            .cloned()
            .unwrap_or_else(|| UNKNOWN_SOURCE_TYPE.to_string());
        extract_from_source(source_config, &source_type, classifier, &mut credentials);
    }

    if !credentials.is_empty() {
        debug!(
            table = %table_config.table_name,
            count = credentials.len(),
            "Extracted credential fields from table config"
        );
    }
    credentials
}

fn extract_from_source(
    source_config: &mut SourceConfig,
    source_type: &str,
    classifier: &CredentialClassifier,
    credentials: &mut CredentialMap,
) {
    let matched: Vec<String> = source_config
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter(|(field, _)| classifier.is_credential_field(field, source_type))
        .map(|(field, _)| field.clone())
        .collect();

    for field in matched {
        // Swap the placeholder in and capture the extracted value.
        if let Some(value) = source_config.insert(field.clone(), PLACEHOLDER.to_string()) {
            credentials.insert(source_type, &field, value);
        }
    }
}
