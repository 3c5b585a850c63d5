//! # hms-store — Record Storage
//!
//! The workflow reads and writes named JSON records in four collections.
//! [`RecordStore`] is that collaborator contract; the workflow never touches
//! the filesystem directly.
//!
//! ## Implementations
//!
//! - [`JsonFileStore`]: one directory per collection under a root, one
//!   `<key>.json` file per record, atomic replace on write.
//! - [`MemoryStore`]: records held in memory, for tests and embedding.
//!
//! Both stores hold records as JSON text and decode on read, so a record that
//! is not valid JSON surfaces as [`StoreError::Malformed`] from either one.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde_json::Value;

/// The four record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Reservations keyed by id card.
    Reservations,
    /// Stay requests presented at check-in.
    StayRequests,
    /// Processed stays keyed by room key.
    ProcessedStays,
    /// Checkout records keyed by room key.
    Checkouts,
}

impl Collection {
    /// Every collection.
    pub const ALL: [Collection; 4] = [
        Self::Reservations,
        Self::StayRequests,
        Self::ProcessedStays,
        Self::Checkouts,
    ];

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reservations => "reservations",
            Self::StayRequests => "stays",
            Self::ProcessedStays => "processed stays",
            Self::Checkouts => "checkouts",
        }
    }

    /// Directory name used by [`JsonFileStore`].
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Reservations => "reservations_store",
            Self::StayRequests => "stays_store",
            Self::ProcessedStays => "processed_stays_store",
            Self::Checkouts => "checkouts_store",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read and write named JSON records.
///
/// `put` creates or overwrites. Keys are opaque strings that must pass
/// [`validate_key`].
pub trait RecordStore {
    /// Read and decode a record.
    fn get(&self, collection: Collection, key: &str) -> Result<Value, StoreError>;

    /// Write a record, replacing any previous one under the key.
    fn put(&self, collection: Collection, key: &str, record: &Value) -> Result<(), StoreError>;

    /// All keys in a collection, sorted.
    fn list_keys(&self, collection: Collection) -> Result<Vec<String>, StoreError>;

    /// Whether a record exists under the key, decodable or not.
    fn contains(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        match self.get(collection, key) {
            Ok(_) | Err(StoreError::Malformed { .. }) => Ok(true),
            Err(StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Serialize and write a typed record.
    fn put_record<T: Serialize>(
        &self,
        collection: Collection,
        key: &str,
        record: &T,
    ) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(record)?;
        self.put(collection, key, &value)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn get(&self, collection: Collection, key: &str) -> Result<Value, StoreError> {
        (**self).get(collection, key)
    }

    fn put(&self, collection: Collection, key: &str, record: &Value) -> Result<(), StoreError> {
        (**self).put(collection, key, record)
    }

    fn list_keys(&self, collection: Collection) -> Result<Vec<String>, StoreError> {
        (**self).list_keys(collection)
    }

    fn contains(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        (**self).contains(collection, key)
    }
}

/// Reject keys that are empty or could escape a collection directory.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let escapes = key.contains("..")
        || key == "."
        || key.contains(['/', '\\', '\0'])
        || key.chars().any(char::is_control);
    if key.is_empty() || escapes {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Encode a record as 4-space indented JSON.
pub(crate) fn to_pretty_json(record: &Value) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::with_capacity(256);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_validation() {
        for good in ["12345678Z", "400f35f5", "a.b", "with space"] {
            assert!(validate_key(good).is_ok(), "{good:?}");
        }
        for bad in ["", ".", "..", "../etc", "a/b", "a\\b", "x..y", "nul\0"] {
            assert!(
                matches!(validate_key(bad), Err(StoreError::InvalidKey(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn collection_names() {
        assert_eq!(Collection::ProcessedStays.dir_name(), "processed_stays_store");
        assert_eq!(Collection::StayRequests.to_string(), "stays");
        assert_eq!(Collection::ALL.len(), 4);
    }

    #[test]
    fn pretty_json_uses_four_spaces() {
        let text = to_pretty_json(&json!({"room_key": "ab", "departure_date": "02/07/2024"})).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert_eq!(
            text,
            "{\n    \"departure_date\": \"02/07/2024\",\n    \"room_key\": \"ab\"\n}"
        );
    }

    #[test]
    fn contains_through_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.put(Collection::Checkouts, "k", &json!({})).unwrap();
        assert!(by_ref.contains(Collection::Checkouts, "k").unwrap());
        assert!(!by_ref.contains(Collection::Checkouts, "other").unwrap());
    }
}
