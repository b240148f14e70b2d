//! Error types for the engine and its external seams.
//!
//! Validation problems are not errors: they are reported as data in a
//! [`ValidationResult`](crate::validation::ValidationResult). The types here
//! cover misuse of the API and failures of the storage and clipboard seams,
//! all of which are recoverable.

use std::io;
use std::path::PathBuf;

use token_namer_vocabulary::{FieldId, Framework};
use uuid::Uuid;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The field is not declared by the framework's schema.
    #[error("field '{field}' does not exist in the {framework} framework")]
    UnknownField {
        /// Framework whose schema was consulted.
        framework: Framework,
        /// The offending field.
        field: FieldId,
    },

    /// No preset with this label exists for the framework.
    #[error("no {framework} preset named '{label}'")]
    UnknownPreset {
        /// Framework whose presets were searched.
        framework: Framework,
        /// The requested label.
        label: String,
    },

    /// No history entry with this id exists.
    #[error("no history entry with id {0}")]
    UnknownHistoryEntry(Uuid),

    /// The JSON export payload could not be serialized.
    #[error("failed to serialize export payload: {0}")]
    Export(#[from] serde_json::Error),
}

/// Errors reported by a [`Store`](crate::store::Store) implementation.
///
/// Callers inside the engine log and swallow these; the in-memory state stays
/// authoritative.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the backing file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the backing file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The stored document is not valid JSON of the expected shape.
    #[error("malformed data in {path}: {source}")]
    Parse {
        /// File holding the malformed document.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The store refused the operation (quota, disabled storage, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by a [`Clipboard`](crate::sinks::Clipboard) sink.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The clipboard mechanism rejected the write.
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),

    /// The clipboard mechanism failed with an I/O error.
    #[error("clipboard i/o failed: {0}")]
    Io(#[from] io::Error),
}
