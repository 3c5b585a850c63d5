//! # hms-crypto — Booking Fingerprints
//!
//! Two digests chain the workflow together:
//!
//! - **Localizer** — MD5 over the reservation's canonical text. It is the
//!   public booking reference handed to the guest and presented again at
//!   check-in.
//! - **Room key** — SHA-256 over the stay's canonical text. It is the
//!   check-in credential and the storage key of the processed stay.
//!
//! ## Crate Policy
//!
//! - Depends only on `hms-core` internally.
//! - Digest functions accept `&CanonicalText` only, never raw strings.
//! - Tests use real MD5 and real SHA-256 against fixed vectors.

pub mod digest;
pub mod localizer;
pub mod room_key;

pub use digest::{is_lower_hex, DigestError, Localizer, RoomKey};
pub use localizer::{localizer_digest, reservation_text, ReservationFingerprint};
pub use room_key::{room_key_digest, stay_text, StayFingerprint, ROOM_KEY_ALGORITHM};
