//! # Stays
//!
//! A guest checks in by presenting a [`StayRequest`]: the id card and the
//! localizer they were given at reservation. A successful check-in writes a
//! [`StayRecord`] keyed by its room key.

use chrono::{NaiveDate, NaiveDateTime};
use hms_core::{EpochSeconds, RoomType};
use hms_crypto::{Localizer, RoomKey, StayFingerprint, ROOM_KEY_ALGORITHM};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::reservation::ReservationDocument;

/// Textual form accepted for a stored departure instant.
pub const DEPARTURE_TEXT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// ─── Stay request ────────────────────────────────────────────────────

/// A stay request document could not be accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StayRequestError {
    /// Not an object with exactly the two expected string keys.
    #[error("stay request must be an object with string keys IdCard and Localizer only")]
    Structure,

    /// The keys are present but the values have the wrong length.
    #[error("stay request IdCard must be 9 and Localizer 32 characters long")]
    Values,
}

/// The check-in credential presented by a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRequest {
    /// Identity document number.
    #[serde(rename = "IdCard")]
    pub id_card: String,
    /// Booking reference.
    #[serde(rename = "Localizer")]
    pub localizer: String,
}

impl StayRequest {
    /// Required id card length.
    pub const ID_CARD_LENGTH: usize = 9;

    /// A request for a reservation.
    pub fn new(id_card: impl Into<String>, localizer: &Localizer) -> Self {
        Self {
            id_card: id_card.into(),
            localizer: localizer.to_string(),
        }
    }

    /// Read a request document.
    ///
    /// The document must be an object with exactly the keys `IdCard` and
    /// `Localizer`, both strings. Only the value lengths are checked here;
    /// content is checked against the stored reservation.
    pub fn from_value(value: &Value) -> Result<Self, StayRequestError> {
        let object = value.as_object().ok_or(StayRequestError::Structure)?;
        if object.len() != 2 {
            return Err(StayRequestError::Structure);
        }
        let field = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .ok_or(StayRequestError::Structure)
        };
        let id_card = field("IdCard")?;
        let localizer = field("Localizer")?;
        if id_card.chars().count() != Self::ID_CARD_LENGTH
            || localizer.chars().count() != Localizer::LENGTH
        {
            return Err(StayRequestError::Values);
        }
        Ok(Self {
            id_card: id_card.to_string(),
            localizer: localizer.to_string(),
        })
    }
}

// ─── Processed stay ──────────────────────────────────────────────────

/// A checked-in stay. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayRecord {
    /// Room key algorithm label.
    pub alg: String,
    /// Room kind.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Identity document number of the guest.
    #[serde(rename = "idCard")]
    pub id_card: String,
    /// Localizer of the reservation.
    pub localizer: Localizer,
    /// Check-in instant.
    pub arrival: EpochSeconds,
    /// Planned departure instant.
    pub departure: EpochSeconds,
    /// SHA-256 over the fields above.
    pub room_key: RoomKey,
}

impl StayRecord {
    /// Check in a verified reservation at `arrival`.
    ///
    /// Departure is `num_days` whole days after arrival.
    pub fn check_in(
        reservation: &ReservationDocument,
        localizer: Localizer,
        arrival: EpochSeconds,
    ) -> Self {
        let room_type = reservation.room_type;
        let departure = arrival.plus_days(reservation.num_days.get());
        let room_key = StayFingerprint {
            room_type: room_type.as_str(),
            localizer: &localizer,
            arrival,
            departure,
        }
        .room_key();
        Self {
            alg: ROOM_KEY_ALGORITHM.to_string(),
            room_type,
            id_card: reservation.id_card.clone(),
            localizer,
            arrival,
            departure,
            room_key,
        }
    }
}

/// The UTC day of a stored stay's `departure`.
///
/// Accepts an epoch number or a `DD/MM/YYYY HH:MM:SS` string. `None` when the
/// field is absent or unreadable.
pub fn departure_day(stay: &Value) -> Option<NaiveDate> {
    match stay.get("departure")? {
        Value::Number(n) => EpochSeconds::new(n.as_f64()?).utc_date(),
        Value::String(s) => NaiveDateTime::parse_from_str(s, DEPARTURE_TEXT_FORMAT)
            .ok()
            .map(|dt| dt.date()),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hms_core::NumDays;
    use serde_json::json;

    const LOCALIZER: &str = "385148f30bfe0c80599f7c844216578a";

    fn reservation() -> ReservationDocument {
        ReservationDocument {
            id_card: "12345678Z".into(),
            name_surname: "John Smith".into(),
            credit_card: "5105105105105100".into(),
            phone_number: "612345789".into(),
            reservation_date: EpochSeconds::new(1_719_792_000.0),
            arrival_date: "01/07/2024".into(),
            num_days: NumDays::new(1).unwrap(),
            room_type: RoomType::Single,
            localizer: LOCALIZER.into(),
        }
    }

    #[test]
    fn request_accepts_two_string_keys() {
        let req = StayRequest::from_value(&json!({"IdCard": "12345678Z", "Localizer": LOCALIZER}))
            .unwrap();
        assert_eq!(req.id_card, "12345678Z");
        assert_eq!(req.localizer, LOCALIZER);
    }

    #[test]
    fn request_structure_errors() {
        let cases = [
            json!([1, 2]),
            json!({"IdCard": "12345678Z"}),
            json!({"IdCard": "12345678Z", "Localizer": LOCALIZER, "Extra": "x"}),
            json!({"IdCard": "12345678Z", "Locator": LOCALIZER}),
            json!({"IdCard": 12345678, "Localizer": LOCALIZER}),
        ];
        for case in cases {
            assert_eq!(
                StayRequest::from_value(&case).unwrap_err(),
                StayRequestError::Structure,
                "{case}"
            );
        }
    }

    #[test]
    fn request_value_errors() {
        let short_id = json!({"IdCard": "1234567Z", "Localizer": LOCALIZER});
        let long_loc = json!({"IdCard": "12345678Z", "Localizer": format!("{LOCALIZER}0")});
        for case in [short_id, long_loc] {
            assert_eq!(StayRequest::from_value(&case).unwrap_err(), StayRequestError::Values);
        }
    }

    #[test]
    fn request_serializes_with_capitalised_keys() {
        let req = StayRequest::new("12345678Z", &Localizer::parse(LOCALIZER).unwrap());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"IdCard": "12345678Z", "Localizer": LOCALIZER})
        );
    }

    #[test]
    fn check_in_golden_room_key() {
        let stay = StayRecord::check_in(
            &reservation(),
            Localizer::parse(LOCALIZER).unwrap(),
            EpochSeconds::new(1_719_792_000.0),
        );
        assert_eq!(stay.departure.as_f64(), 1_719_878_400.0);
        assert_eq!(
            stay.room_key.as_str(),
            "400f35f55fc2be1b5022aec0e2509cd53ca6cd9017e6e5da4cfe375d18758617"
        );
    }

    #[test]
    fn processed_stay_shape() {
        let stay = StayRecord::check_in(
            &reservation(),
            Localizer::parse(LOCALIZER).unwrap(),
            EpochSeconds::new(1_719_792_000.0),
        );
        assert_eq!(
            serde_json::to_value(&stay).unwrap(),
            json!({
                "alg": "SHA-256",
                "type": "single",
                "idCard": "12345678Z",
                "localizer": LOCALIZER,
                "arrival": 1_719_792_000.0,
                "departure": 1_719_878_400.0,
                "room_key": "400f35f55fc2be1b5022aec0e2509cd53ca6cd9017e6e5da4cfe375d18758617"
            })
        );
    }

    #[test]
    fn departure_day_forms() {
        let july_2 = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert_eq!(departure_day(&json!({"departure": 1_719_878_400.0})), Some(july_2));
        assert_eq!(departure_day(&json!({"departure": 1_719_878_400u64})), Some(july_2));
        assert_eq!(
            departure_day(&json!({"departure": "02/07/2024 11:30:00"})),
            Some(july_2)
        );
        assert_eq!(departure_day(&json!({"departure": "2024-07-02"})), None);
        assert_eq!(departure_day(&json!({"departure": null})), None);
        assert_eq!(departure_day(&json!({})), None);
    }
}
