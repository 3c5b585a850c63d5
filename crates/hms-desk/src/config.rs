//! Front-desk configuration.
//!
//! Defaults keep the record store under `./hms_store` and accept 64-character
//! room keys, the length of the SHA-256 keys issued at check-in. Override via
//! environment variables or a YAML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the store root.
pub const ENV_STORE_ROOT: &str = "HMS_STORE_ROOT";
/// Environment variable overriding the accepted room key length.
pub const ENV_ROOM_KEY_LENGTH: &str = "HMS_ROOM_KEY_LENGTH";

const DEFAULT_STORE_ROOT: &str = "./hms_store";
const DEFAULT_ROOM_KEY_LENGTH: usize = 64;

/// Settings for a [`FrontDesk`](crate::FrontDesk) and its file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeskConfig {
    /// Root directory of the JSON file store.
    pub store_root: PathBuf,
    /// Room key length accepted at checkout.
    pub room_key_length: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(DEFAULT_STORE_ROOT),
            room_key_length: DEFAULT_ROOM_KEY_LENGTH,
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `HMS_STORE_ROOT` (default: `./hms_store`)
    /// - `HMS_ROOM_KEY_LENGTH` (default: 64)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let store_root = lookup(ENV_STORE_ROOT)
            .map(PathBuf::from)
            .unwrap_or(defaults.store_root);
        let room_key_length = match lookup(ENV_ROOM_KEY_LENGTH) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidRoomKeyLength(raw.clone()))?,
            None => defaults.room_key_length,
        };
        Self {
            store_root,
            room_key_length,
        }
        .validated()
    }

    /// Load configuration from a YAML file. Missing keys take defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.room_key_length == 0 {
            return Err(ConfigError::InvalidRoomKeyLength(
                self.room_key_length.to_string(),
            ));
        }
        Ok(self)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for this schema.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: serde_yaml::Error,
    },

    /// The room key length is not a positive integer.
    #[error("invalid room key length {0:?}: must be a positive integer")]
    InvalidRoomKeyLength(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = DeskConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, DeskConfig::default());
        assert_eq!(cfg.store_root, PathBuf::from("./hms_store"));
        assert_eq!(cfg.room_key_length, 64);
    }

    #[test]
    fn env_overrides() {
        let cfg = DeskConfig::from_lookup(lookup(&[
            (ENV_STORE_ROOT, "/var/lib/hms"),
            (ENV_ROOM_KEY_LENGTH, "32"),
        ]))
        .unwrap();
        assert_eq!(cfg.store_root, PathBuf::from("/var/lib/hms"));
        assert_eq!(cfg.room_key_length, 32);
    }

    #[test]
    fn bad_room_key_length() {
        for bad in ["sixty-four", "-1", "0"] {
            let err = DeskConfig::from_lookup(lookup(&[(ENV_ROOM_KEY_LENGTH, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidRoomKeyLength(_)), "{bad}");
        }
    }

    #[test]
    fn yaml_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_root: /tmp/hotel").unwrap();
        let cfg = DeskConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(cfg.store_root, PathBuf::from("/tmp/hotel"));
        assert_eq!(cfg.room_key_length, 64);
    }

    #[test]
    fn yaml_errors() {
        let missing = DeskConfig::from_yaml_file(Path::new("/nonexistent/hms.yaml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "room_key_lenght: 32").unwrap();
        let unknown = DeskConfig::from_yaml_file(file.path()).unwrap_err();
        assert!(matches!(unknown, ConfigError::Parse { .. }));
    }
}
