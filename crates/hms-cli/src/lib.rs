//! # hms-cli — Command Line for the Hotel Front Desk
//!
//! Provides the `hms` binary.
//!
//! ## Subcommands
//!
//! - `hms reserve` — validate and store a reservation, print its localizer.
//! - `hms request` — write a stay request, print its reference.
//! - `hms arrive` — check a guest in from a stay request, print the room key.
//! - `hms checkout` — check a guest out by room key.
//! - `hms status` — print the booking state for an id card.
//!
//! ```bash
//! hms reserve --credit-card 5105105105105100 --name-surname "John Smith" \
//!     --id-card 12345678Z --phone-number 612345789 --room-type single \
//!     --arrival-date 01/07/2024 --num-days 1
//! hms request --id-card 12345678Z --localizer 385148f30bfe0c80599f7c844216578a
//! hms arrive 12345678Z.json
//! ```

pub mod arrival;
pub mod checkout;
pub mod reserve;
pub mod status;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hms_core::SystemClock;
use hms_desk::{DeskConfig, FrontDesk};
use hms_store::JsonFileStore;

/// The desk the CLI drives: JSON files on disk and the system clock.
pub type Desk = FrontDesk<JsonFileStore, SystemClock>;

/// Resolve configuration from `--config` (or the environment) and `--store`.
pub fn load_config(config: Option<&Path>, store: Option<&Path>) -> Result<DeskConfig> {
    let mut cfg = match config {
        Some(path) => DeskConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DeskConfig::from_env().context("failed to read configuration from environment")?,
    };
    if let Some(root) = store {
        cfg.store_root = PathBuf::from(root);
    }
    Ok(cfg)
}

/// Open a desk over the configured store root.
pub fn open_desk(cfg: &DeskConfig) -> Desk {
    tracing::debug!(store_root = %cfg.store_root.display(), "opening record store");
    FrontDesk::with_config(JsonFileStore::new(&cfg.store_root), SystemClock, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn store_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_root: /from/file\nroom_key_length: 64").unwrap();
        let cfg = load_config(Some(file.path()), Some(Path::new("/from/flag"))).unwrap();
        assert_eq!(cfg.store_root, PathBuf::from("/from/flag"));
        assert_eq!(cfg.room_key_length, 64);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/hms.yaml")), None).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }
}
