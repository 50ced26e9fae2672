//! Credential map and the secret-reference encoding.
//!
//! A [`CredentialMap`] collects the values pulled out of a table's source
//! configurations, keyed by `sourceType.fieldName`, together with the
//! per-source-type list of extracted field names. On the wire (the blob
//! handed to the secret store) it is a flat JSON object; the field-list
//! mapping travels inside it as a nested JSON string under the reserved
//! [`CREDENTIAL_FIELDS_KEY`] entry.

use std::collections::BTreeMap;

/// Reserved blob entry holding the serialized source-type → field-list map.
pub const CREDENTIAL_FIELDS_KEY: &str = "__CREDENTIAL_FIELDS__";

/// Sentinel written into a source-configuration field between extraction
/// and reference replacement. Never survives a successful store.
pub const PLACEHOLDER: &str = "TO_BE_REPLACED";

/// Prefix marking a field value as a secret reference.
pub const SECRET_REFERENCE_PREFIX: &str = "SECRET:";

/// Compound key identifying one extracted value inside a credential map.
pub fn compound_key(source_type: &str, field_name: &str) -> String {
    format!("{}.{}", source_type, field_name)
}

/// Encode a storage key as a secret reference.
pub fn secret_reference(storage_key: &str) -> String {
    format!("{}{}", SECRET_REFERENCE_PREFIX, storage_key)
}

/// The storage key inside a secret reference, or `None` if `value` is a
/// plain configuration value.
pub fn reference_key(value: &str) -> Option<&str> {
    value.strip_prefix(SECRET_REFERENCE_PREFIX)
}

/// Credentials extracted from one table configuration.
///
/// Created fresh per extraction, serialized into a single blob for the
/// secret store, then discarded; the store owns the only durable copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialMap {
    /// Compound key → extracted value.
    values: BTreeMap<String, String>,
    /// Source type → field names extracted for it.
    fields: BTreeMap<String, Vec<String>>,
}

impl CredentialMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of extracted values (the reserved entry is not counted).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Record an extracted value and its field-list entry.
    pub fn insert(&mut self, source_type: &str, field_name: &str, value: String) {
        self.values.insert(compound_key(source_type, field_name), value);
        let fields = self.fields.entry(source_type.to_string()).or_default();
        if !fields.iter().any(|f| f == field_name) {
            fields.push(field_name.to_string());
        }
    }

    /// Extracted value under a compound key.
    pub fn value(&self, compound_key: &str) -> Option<&str> {
        self.values.get(compound_key).map(String::as_str)
    }

    /// Field names recorded for a source type.
    pub fn extracted_fields(&self, source_type: &str) -> Option<&[String]> {
        self.fields.get(source_type).map(Vec::as_slice)
    }

    /// True if `field_name` was extracted for `source_type`.
    pub fn contains_field(&self, source_type: &str, field_name: &str) -> bool {
        self.extracted_fields(source_type)
            .is_some_and(|fields| fields.iter().any(|f| f == field_name))
    }

    /// Serialize to the wire blob. The reserved field-list entry is
    /// written whenever the map is non-empty; without it, resolution
    /// cannot recover which fields belong to which source type.
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        let mut flat = self.values.clone();
        if !flat.is_empty() {
            flat.insert(CREDENTIAL_FIELDS_KEY.to_string(), serde_json::to_string(&self.fields)?);
        }
        serde_json::to_string(&flat)
    }

    /// Parse a wire blob. A blob without the reserved entry yields a map
    /// with no recorded fields, so nothing resolves out of it.
    pub fn from_blob(blob: &str) -> Result<Self, serde_json::Error> {
        let mut flat: BTreeMap<String, String> = serde_json::from_str(blob)?;
        let fields = match flat.remove(CREDENTIAL_FIELDS_KEY) {
            Some(raw) => serde_json::from_str(&raw)?,
            None => BTreeMap::new(),
        };
        Ok(Self { values: flat, fields })
    }
}
