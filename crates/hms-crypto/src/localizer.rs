//! # Reservation Localizer
//!
//! The localizer is the MD5 digest of a reservation's canonical text:
//!
//! ```text
//! HotelReservation:{'id_card': '12345678Z', 'name_surname': 'John Smith', 'credit_card': '5105105105105100', 'phone_number:': '612345789', 'reservation_date': 1719792000.0, 'arrival_date': '01/07/2024', 'num_days': 1, 'room_type': 'single'}
//! ```
//!
//! The key `'phone_number:'` keeps its trailing colon. Localizers issued to
//! guests were computed over exactly this text, so it cannot be corrected
//! without invalidating every outstanding booking reference.
//!
//! The fingerprint takes the stored field text rather than validated types so
//! that a localizer can be recomputed from any persisted reservation, including
//! one whose contents were edited after issue.

use hms_core::{CanonicalText, DictValue, EpochSeconds};
use md5::{Digest, Md5};

use crate::digest::Localizer;

/// Type tag that prefixes the reservation's canonical text.
pub const RESERVATION_TAG: &str = "HotelReservation";

/// The reservation fields that the localizer commits to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservationFingerprint<'a> {
    /// Identity document number.
    pub id_card: &'a str,
    /// Guest full name.
    pub name_surname: &'a str,
    /// Payment card number.
    pub credit_card: &'a str,
    /// Contact phone.
    pub phone_number: &'a str,
    /// Instant the reservation was created.
    pub reservation_date: EpochSeconds,
    /// Arrival day as `DD/MM/YYYY`.
    pub arrival_date: &'a str,
    /// Nights booked.
    pub num_days: i64,
    /// Room type wire name.
    pub room_type: &'a str,
}

/// Render a reservation's canonical text.
pub fn reservation_text(fp: &ReservationFingerprint<'_>) -> CanonicalText {
    CanonicalText::tagged_dict(
        RESERVATION_TAG,
        &[
            ("id_card", DictValue::Str(fp.id_card)),
            ("name_surname", DictValue::Str(fp.name_surname)),
            ("credit_card", DictValue::Str(fp.credit_card)),
            ("phone_number:", DictValue::Str(fp.phone_number)),
            ("reservation_date", DictValue::Float(fp.reservation_date.as_f64())),
            ("arrival_date", DictValue::Str(fp.arrival_date)),
            ("num_days", DictValue::Int(fp.num_days)),
            ("room_type", DictValue::Str(fp.room_type)),
        ],
    )
}

/// Compute the MD5 localizer over canonical text.
pub fn localizer_digest(text: &CanonicalText) -> Localizer {
    let hash = Md5::digest(text.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash);
    Localizer::from_digest(&bytes)
}

impl ReservationFingerprint<'_> {
    /// The canonical text for these fields.
    pub fn canonical_text(&self) -> CanonicalText {
        reservation_text(self)
    }

    /// The localizer for these fields.
    pub fn localizer(&self) -> Localizer {
        localizer_digest(&self.canonical_text())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Same fields, same localizer.
        #[test]
        fn deterministic(name in "[A-Za-z]{3,10} [A-Za-z]{3,10}", days in 1i64..=10, ts in 1.6e9f64..1.9e9) {
            let fp = ReservationFingerprint {
                id_card: "12345678Z",
                name_surname: &name,
                credit_card: "5105105105105100",
                phone_number: "612345789",
                reservation_date: EpochSeconds::new(ts),
                arrival_date: "01/07/2024",
                num_days: days,
                room_type: "suite",
            };
            prop_assert_eq!(fp.localizer(), fp.localizer());
        }
    }
}
