//! # Room Key
//!
//! SHA-256 over the stay's canonical text:
//!
//! ```text
//! {alg:SHA-256,typ:single,localizer:385148f30bfe0c80599f7c844216578a,arrival:1719792000.0,departure:1719878400.0}
//! ```

use hms_core::{CanonicalText, EpochSeconds};
use sha2::{Digest, Sha256};

use crate::digest::{Localizer, RoomKey};

/// Algorithm label written into the stay text and the processed-stay record.
pub const ROOM_KEY_ALGORITHM: &str = "SHA-256";

/// The stay fields that the room key commits to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayFingerprint<'a> {
    /// Room type wire name.
    pub room_type: &'a str,
    /// Localizer of the reservation being checked in.
    pub localizer: &'a Localizer,
    /// Check-in instant.
    pub arrival: EpochSeconds,
    /// Planned departure instant.
    pub departure: EpochSeconds,
}

/// Render a stay's canonical text.
pub fn stay_text(fp: &StayFingerprint<'_>) -> CanonicalText {
    let arrival = fp.arrival.to_string();
    let departure = fp.departure.to_string();
    CanonicalText::bare_record(&[
        ("alg", ROOM_KEY_ALGORITHM),
        ("typ", fp.room_type),
        ("localizer", fp.localizer.as_str()),
        ("arrival", &arrival),
        ("departure", &departure),
    ])
}

/// Compute the SHA-256 room key over canonical text.
pub fn room_key_digest(text: &CanonicalText) -> RoomKey {
    let hash = Sha256::digest(text.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    RoomKey::from_digest(&bytes)
}

impl StayFingerprint<'_> {
    /// The canonical text for these fields.
    pub fn canonical_text(&self) -> CanonicalText {
        stay_text(self)
    }

    /// The room key for these fields.
    pub fn room_key(&self) -> RoomKey {
        room_key_digest(&self.canonical_text())
    }
}
