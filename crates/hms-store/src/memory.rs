//! # In-Memory Store

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde_json::Value;

use crate::{to_pretty_json, validate_key, Collection, RecordStore, StoreError};

/// Records held as JSON text in a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<(Collection, String), String>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store text as a record without encoding it.
    pub fn put_raw(
        &self,
        collection: Collection,
        key: &str,
        text: impl Into<String>,
    ) -> Result<(), StoreError> {
        validate_key(key)?;
        self.records
            .write()
            .insert((collection, key.to_string()), text.into());
        Ok(())
    }

    /// Number of records across all collections.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, collection: Collection, key: &str) -> Result<Value, StoreError> {
        validate_key(key)?;
        let records = self.records.read();
        let text = records
            .get(&(collection, key.to_string()))
            .ok_or_else(|| StoreError::NotFound {
                collection,
                key: key.to_string(),
            })?;
        serde_json::from_str(text).map_err(|source| StoreError::Malformed {
            collection,
            key: key.to_string(),
            source,
        })
    }

    fn put(&self, collection: Collection, key: &str, record: &Value) -> Result<(), StoreError> {
        let bytes = to_pretty_json(record)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        self.put_raw(collection, key, text)?;
        tracing::debug!(collection = %collection, key, "stored record in memory");
        Ok(())
    }

    fn list_keys(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        Ok(self
            .records
            .read()
            .keys()
            .filter(|(c, _)| *c == collection)
            .map(|(_, k)| k.clone())
            .collect())
    }

    fn contains(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        validate_key(key)?;
        Ok(self
            .records
            .read()
            .contains_key(&(collection, key.to_string())))
    }
}
