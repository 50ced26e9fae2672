//! Table configuration model.
//!
//! A minimal, serde-backed view of a table's ingestion definition: just
//! enough structure to reach the batch and stream source-configuration
//! maps, with every unmodeled field carried through `#[serde(flatten)]`
//! so round trips preserve the parts this crate does not interpret.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single data-source configuration: a flat map of field name to value,
/// tagged by a `sourceType` (batch) or `streamType` (stream) entry.
pub type SourceConfig = BTreeMap<String, String>;

/// Source type assumed when a source configuration carries no type field.
pub const UNKNOWN_SOURCE_TYPE: &str = "unknown";

/// Which ingestion section a source configuration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Batch,
    Stream,
}

impl SourceKind {
    /// Name of the field holding the source's connector type.
    pub fn type_field(&self) -> &'static str {
        match self {
            Self::Batch => "sourceType",
            Self::Stream => "streamType",
        }
    }
}

/// Connector type of a source configuration, checking `sourceType` then
/// `streamType`, defaulting to [`UNKNOWN_SOURCE_TYPE`].
pub fn source_type_of(config: &SourceConfig) -> &str {
    config
        .get("sourceType")
        .or_else(|| config.get("streamType"))
        .map(String::as_str)
        .unwrap_or(UNKNOWN_SOURCE_TYPE)
}

/// A table configuration. `table_name` carries the type-suffixed name
/// (e.g. `events_REALTIME`) used to build storage paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub table_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_config: Option<IngestionConfig>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_ingestion_config: Option<BatchIngestionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_ingestion_config: Option<StreamIngestionConfig>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchIngestionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_config_maps: Option<Vec<SourceConfig>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamIngestionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_config_maps: Option<Vec<SourceConfig>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl TableConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self { table_name: table_name.into(), ingestion_config: None, extra: BTreeMap::new() }
    }

    /// Append a batch source configuration (test and builder convenience).
    pub fn with_batch_source(mut self, source: SourceConfig) -> Self {
        self.ingestion_config
            .get_or_insert_with(IngestionConfig::default)
            .batch_ingestion_config
            .get_or_insert_with(BatchIngestionConfig::default)
            .batch_config_maps
            .get_or_insert_with(Vec::new)
            .push(source);
        self
    }

    /// Append a stream source configuration (test and builder convenience).
    pub fn with_stream_source(mut self, source: SourceConfig) -> Self {
        self.ingestion_config
            .get_or_insert_with(IngestionConfig::default)
            .stream_ingestion_config
            .get_or_insert_with(StreamIngestionConfig::default)
            .stream_config_maps
            .get_or_insert_with(Vec::new)
            .push(source);
        self
    }

    /// Every reachable source configuration, batch sections first.
    pub fn source_configs(&self) -> impl Iterator<Item = (SourceKind, &SourceConfig)> {
        let (batch, stream) = match &self.ingestion_config {
            Some(ingestion) => (
                ingestion.batch_ingestion_config.as_ref().and_then(|b| b.batch_config_maps.as_ref()),
                ingestion
                    .stream_ingestion_config
                    .as_ref()
                    .and_then(|s| s.stream_config_maps.as_ref()),
            ),
            None => (None, None),
        };
        batch
            .into_iter()
            .flatten()
            .map(|config| (SourceKind::Batch, config))
            .chain(stream.into_iter().flatten().map(|config| (SourceKind::Stream, config)))
    }

    /// Mutable variant of [`source_configs`](Self::source_configs).
    pub fn source_configs_mut(&mut self) -> impl Iterator<Item = (SourceKind, &mut SourceConfig)> {
        let (batch, stream) = match &mut self.ingestion_config {
            Some(ingestion) => (
                ingestion.batch_ingestion_config.as_mut().and_then(|b| b.batch_config_maps.as_mut()),
                ingestion
                    .stream_ingestion_config
                    .as_mut()
                    .and_then(|s| s.stream_config_maps.as_mut()),
            ),
            None => (None, None),
        };
        batch
            .into_iter()
            .flatten()
            .map(|config| (SourceKind::Batch, config))
            .chain(stream.into_iter().flatten().map(|config| (SourceKind::Stream, config)))
    }
}
