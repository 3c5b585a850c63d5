//! # Digest Newtypes
//!
//! [`Localizer`] and [`RoomKey`] are lowercase hex strings of fixed length.
//! They are produced by the digest functions in this crate, or parsed back
//! from persisted records and user input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A hex digest string failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Wrong number of characters.
    #[error("{kind} must be {expected} characters long, got {actual}")]
    Length {
        /// Which digest was being parsed.
        kind: &'static str,
        /// Required length.
        expected: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// A character outside `0-9a-f`.
    #[error("{kind} must be lowercase hex")]
    NotHex {
        /// Which digest was being parsed.
        kind: &'static str,
    },
}

/// Whether every character is a lowercase hex digit.
pub fn is_lower_hex(value: &str) -> bool {
    value.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

fn parse_hex(kind: &'static str, value: &str, expected: usize) -> Result<String, DigestError> {
    let actual = value.chars().count();
    if actual != expected {
        return Err(DigestError::Length {
            kind,
            expected,
            actual,
        });
    }
    if !is_lower_hex(value) {
        return Err(DigestError::NotHex { kind });
    }
    Ok(value.to_string())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// The 32-character MD5 booking reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Localizer(String);

impl Localizer {
    /// Hex length of an MD5 digest.
    pub const LENGTH: usize = 32;

    /// Parse a stored or presented localizer.
    pub fn parse(value: &str) -> Result<Self, DigestError> {
        parse_hex("localizer", value, Self::LENGTH).map(Self)
    }

    pub(crate) fn from_digest(bytes: &[u8; 16]) -> Self {
        Self(to_hex(bytes))
    }

    /// The hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The 64-character SHA-256 room key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomKey(String);

impl RoomKey {
    /// Hex length of a SHA-256 digest.
    pub const LENGTH: usize = 64;

    /// Parse a stored or presented room key.
    pub fn parse(value: &str) -> Result<Self, DigestError> {
        parse_hex("room key", value, Self::LENGTH).map(Self)
    }

    pub(crate) fn from_digest(bytes: &[u8; 32]) -> Self {
        Self(to_hex(bytes))
    }

    /// The hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_conversions {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = DigestError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_conversions!(Localizer);
string_conversions!(RoomKey);
