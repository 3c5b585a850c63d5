//! # Booking Parameters
//!
//! The stay-shaped fields of a reservation: which kind of room and for how
//! many nights.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The kind of room booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// One guest.
    Single,
    /// Two guests.
    Double,
    /// Suite.
    Suite,
}

impl RoomType {
    /// Parse a room type from its lowercase wire name.
    ///
    /// # Errors
    ///
    /// [`ValidationError::RoomTypeValue`] for anything other than `single`,
    /// `double`, or `suite`. Matching is case-sensitive.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            _ => Err(ValidationError::RoomTypeValue),
        }
    }

    /// The lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Suite => "suite",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Number of nights booked, 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct NumDays(u32);

impl NumDays {
    /// Shortest bookable stay.
    pub const MIN: u32 = 1;
    /// Longest bookable stay.
    pub const MAX: u32 = 10;

    /// Validate a stay length.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NumDaysRange`] outside 1..=10.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or(ValidationError::NumDaysRange)
    }

    /// The number of nights.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for NumDays {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NumDays> for u32 {
    fn from(value: NumDays) -> Self {
        value.0
    }
}

impl std::fmt::Display for NumDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
