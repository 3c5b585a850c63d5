//! # Store Errors

use std::path::PathBuf;

use thiserror::Error;

use crate::Collection;

/// A record could not be read or written.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record under this key.
    #[error("no record {key:?} in {collection}")]
    NotFound {
        /// Collection searched.
        collection: Collection,
        /// Requested key.
        key: String,
    },

    /// The record exists but is not a JSON document.
    #[error("record {key:?} in {collection} is not valid JSON: {source}")]
    Malformed {
        /// Collection read.
        collection: Collection,
        /// Requested key.
        key: String,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// The key cannot name a record.
    #[error("invalid record key {0:?}")]
    InvalidKey(String),

    /// Filesystem failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded.
    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The temporary file could not be moved into place.
    #[error("failed to persist {path}: {source}")]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: tempfile::PersistError,
    },
}

impl StoreError {
    /// Whether this is a missing-record error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
