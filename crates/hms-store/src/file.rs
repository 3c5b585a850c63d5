//! # JSON File Store
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/reservations_store/<id_card>.json
//! <root>/stays_store/<id_card>.json
//! <root>/processed_stays_store/<room_key>.json
//! <root>/checkouts_store/<room_key>.json
//! ```
//!
//! Writes land in a temporary file inside the target directory and are then
//! renamed over the destination, so a reader never sees a half-written record.
//! The process working directory is never changed.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::{to_pretty_json, validate_key, Collection, RecordStore, StoreError};

const EXTENSION: &str = "json";

/// Records as `<key>.json` files, one directory per collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// A store rooted at `root`. Directories are created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a collection.
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.dir_name())
    }

    /// File path of a record.
    pub fn record_path(&self, collection: Collection, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self
            .collection_dir(collection)
            .join(format!("{key}.{EXTENSION}")))
    }

    /// Write raw bytes as a record without encoding them.
    ///
    /// Used to import documents produced elsewhere; the bytes are not checked
    /// to be JSON.
    pub fn put_raw(&self, collection: Collection, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.record_path(collection, key)?;
        write_atomic(&path, bytes)?;
        tracing::debug!(collection = %collection, key, path = %path.display(), "wrote raw record");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, collection: Collection, key: &str) -> Result<Value, StoreError> {
        let path = self.record_path(collection, key)?;
        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound {
                    collection,
                    key: key.to_string(),
                }
            } else {
                StoreError::Io {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;
        tracing::debug!(collection = %collection, key, bytes = bytes.len(), "read record");
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            collection,
            key: key.to_string(),
            source,
        })
    }

    fn put(&self, collection: Collection, key: &str, record: &Value) -> Result<(), StoreError> {
        let path = self.record_path(collection, key)?;
        let bytes = to_pretty_json(record)?;
        write_atomic(&path, &bytes)?;
        tracing::debug!(collection = %collection, key, path = %path.display(), "wrote record");
        Ok(())
    }

    fn list_keys(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        let dir = self.collection_dir(collection);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path: dir, source }),
        };
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn contains(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        Ok(self.record_path(collection, key)?.is_file())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let io_err = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(io_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
