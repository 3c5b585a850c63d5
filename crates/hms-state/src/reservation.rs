//! # Reservation Records
//!
//! Three shapes of a reservation:
//!
//! - [`ReservationRequest`]: raw field values as they arrive, before any rule
//!   runs. Built from a JSON object or from command-line arguments.
//! - [`ReservationFields`] / [`ReservationRecord`]: validated newtypes only.
//!   A record is issued from validated fields plus the creation instant, and
//!   its localizer is computed at that moment.
//! - [`ReservationDocument`]: the persisted shape read back at check-in.
//!   Free-text fields stay as strings so that an edited document still loads
//!   and its localizer can be recomputed and compared.

use hms_core::{
    ArrivalDate, CreditCard, EpochSeconds, IdCard, NameSurname, NumDays, PhoneNumber, RoomType,
    ValidationError,
};
use hms_crypto::{Localizer, ReservationFingerprint};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Request ─────────────────────────────────────────────────────────

/// Unvalidated reservation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// Payment card number.
    pub credit_card: String,
    /// Guest full name.
    pub name_surname: String,
    /// Identity document number.
    pub id_card: String,
    /// Contact phone.
    pub phone_number: String,
    /// `single`, `double`, or `suite`.
    pub room_type: String,
    /// `DD/MM/YYYY`.
    pub arrival_date: String,
    /// Nights to stay.
    pub num_days: i64,
}

impl ReservationRequest {
    /// Read request fields from a JSON object, checking only their JSON types.
    ///
    /// Fields are checked in validation order and the first mismatch is
    /// returned. A missing field counts as the wrong type. Integers too large
    /// for `i64` are kept as out of range rather than rejected here.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let text = |key: &str, err: ValidationError| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or(err)
        };
        let credit_card = text("credit_card", ValidationError::CreditCardNotString)?;
        let name_surname = text("name_surname", ValidationError::NameSurnameNotString)?;
        let id_card = text("id_card", ValidationError::IdCardNotString)?;
        let phone_number = text("phone_number", ValidationError::PhoneNumberNotString)?;
        let room_type = text("room_type", ValidationError::RoomTypeNotString)?;
        let arrival_date = text("arrival_date", ValidationError::ArrivalDateNotString)?;
        let num_days = match value.get("num_days") {
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                n.as_i64().unwrap_or(i64::MAX)
            }
            _ => return Err(ValidationError::NumDaysNotInt),
        };
        Ok(Self {
            credit_card,
            name_surname,
            id_card,
            phone_number,
            room_type,
            arrival_date,
            num_days,
        })
    }
}

// ─── Validated fields ────────────────────────────────────────────────

/// Reservation fields that have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationFields {
    /// Payment card number.
    pub credit_card: CreditCard,
    /// Guest full name.
    pub name_surname: NameSurname,
    /// Identity document number.
    pub id_card: IdCard,
    /// Contact phone.
    pub phone_number: PhoneNumber,
    /// Room kind.
    pub room_type: RoomType,
    /// Arrival day.
    pub arrival_date: ArrivalDate,
    /// Nights to stay.
    pub num_days: NumDays,
}

/// A reservation as issued and persisted, keyed by its id card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Identity document number.
    pub id_card: IdCard,
    /// Guest full name.
    pub name_surname: NameSurname,
    /// Payment card number.
    pub credit_card: CreditCard,
    /// Contact phone.
    pub phone_number: PhoneNumber,
    /// Creation instant.
    pub reservation_date: EpochSeconds,
    /// Arrival day.
    pub arrival_date: ArrivalDate,
    /// Nights to stay.
    pub num_days: NumDays,
    /// Room kind.
    pub room_type: RoomType,
    /// MD5 over the fields above.
    pub localizer: Localizer,
}

impl ReservationRecord {
    /// Issue a reservation created at `reservation_date`.
    pub fn issue(fields: ReservationFields, reservation_date: EpochSeconds) -> Self {
        let ReservationFields {
            credit_card,
            name_surname,
            id_card,
            phone_number,
            room_type,
            arrival_date,
            num_days,
        } = fields;
        let arrival_text = arrival_date.to_string();
        let localizer = ReservationFingerprint {
            id_card: id_card.as_str(),
            name_surname: name_surname.as_str(),
            credit_card: credit_card.as_str(),
            phone_number: phone_number.as_str(),
            reservation_date,
            arrival_date: &arrival_text,
            num_days: i64::from(num_days.get()),
            room_type: room_type.as_str(),
        }
        .localizer();
        Self {
            id_card,
            name_surname,
            credit_card,
            phone_number,
            reservation_date,
            arrival_date,
            num_days,
            room_type,
            localizer,
        }
    }
}

// ─── Persisted document ──────────────────────────────────────────────

/// A stored reservation read back for check-in.
///
/// Room type and stay length must still be well-typed because the stay is
/// derived from them; everything else is kept as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDocument {
    /// Identity document number as stored.
    pub id_card: String,
    /// Guest full name as stored.
    pub name_surname: String,
    /// Payment card number as stored.
    pub credit_card: String,
    /// Contact phone as stored.
    pub phone_number: String,
    /// Creation instant.
    pub reservation_date: EpochSeconds,
    /// Arrival day as stored.
    pub arrival_date: String,
    /// Nights to stay.
    pub num_days: NumDays,
    /// Room kind.
    pub room_type: RoomType,
    /// Localizer as stored.
    pub localizer: String,
}

impl ReservationDocument {
    /// The fields the localizer commits to, exactly as stored.
    pub fn fingerprint(&self) -> ReservationFingerprint<'_> {
        ReservationFingerprint {
            id_card: &self.id_card,
            name_surname: &self.name_surname,
            credit_card: &self.credit_card,
            phone_number: &self.phone_number,
            reservation_date: self.reservation_date,
            arrival_date: &self.arrival_date,
            num_days: i64::from(self.num_days.get()),
            room_type: self.room_type.as_str(),
        }
    }

    /// Recompute the localizer from the stored fields.
    pub fn recomputed_localizer(&self) -> Localizer {
        self.fingerprint().localizer()
    }

    /// The stored arrival day, if it still parses.
    pub fn arrival_day(&self) -> Option<ArrivalDate> {
        ArrivalDate::parse(&self.arrival_date).ok()
    }
}

impl From<&ReservationRecord> for ReservationDocument {
    fn from(record: &ReservationRecord) -> Self {
        Self {
            id_card: record.id_card.to_string(),
            name_surname: record.name_surname.to_string(),
            credit_card: record.credit_card.to_string(),
            phone_number: record.phone_number.to_string(),
            reservation_date: record.reservation_date,
            arrival_date: record.arrival_date.to_string(),
            num_days: record.num_days,
            room_type: record.room_type,
            localizer: record.localizer.to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
