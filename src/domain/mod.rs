//! Domain types: the table-configuration surface the credential protocol
//! operates on.

pub mod table;

pub use table::{
    source_type_of, BatchIngestionConfig, IngestionConfig, SourceConfig, SourceKind,
    StreamIngestionConfig, TableConfig, UNKNOWN_SOURCE_TYPE,
};
