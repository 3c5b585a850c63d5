//! # Checkout Record
//!
//! The terminal record of a booking, keyed by room key.

use chrono::NaiveDate;
use hms_crypto::RoomKey;
use serde::{Deserialize, Serialize};

/// A completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    /// Room key of the stay.
    pub room_key: RoomKey,
    /// Day the guest left, written `DD/MM/YYYY`.
    #[serde(with = "day_format")]
    pub departure_date: NaiveDate,
}

impl CheckoutRecord {
    /// Record a checkout on `day`.
    pub fn new(room_key: RoomKey, day: NaiveDate) -> Self {
        Self {
            room_key,
            departure_date: day,
        }
    }
}

mod day_format {
    use chrono::NaiveDate;
    use hms_core::ArrivalDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&day.format(ArrivalDate::FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        ArrivalDate::parse(&text)
            .map(|d| d.date())
            .map_err(serde::de::Error::custom)
    }
}
