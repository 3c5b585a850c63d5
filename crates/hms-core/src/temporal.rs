//! # Temporal Types — Injected UTC Clock, Epoch Seconds, Arrival Dates
//!
//! All time in the stack is UTC. "Now" is never read directly from the
//! system; it flows through the [`Clock`] trait so every workflow step is
//! reproducible under a frozen clock.
//!
//! ## Epoch seconds
//!
//! Persisted records carry instants as epoch seconds in an IEEE-754 double
//! (`1719792000.0`). [`EpochSeconds`] keeps that representation end to end:
//! the fingerprint text renders the exact value that is written to disk, so a
//! fingerprint recomputed from a stored record reproduces the original.
//!
//! ## Arrival dates
//!
//! [`ArrivalDate`] is a calendar day written `DD/MM/YYYY`. Parsing checks the
//! shape first, then that the day exists (Gregorian leap rule), and
//! optionally that it is not before a given day.

use std::cell::Cell;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::canonical::float_literal;
use crate::error::ValidationError;

/// Seconds in one booked night.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the current instant.
pub trait Clock {
    /// The current UTC instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a settable instant.
#[derive(Debug, Clone)]
pub struct FixedClock(Cell<DateTime<Utc>>);

impl FixedClock {
    /// Freeze the clock at an instant.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(Cell::new(at))
    }

    /// Freeze the clock at midnight UTC of a calendar day.
    pub fn at_midnight(day: NaiveDate) -> Self {
        Self::new(midnight_utc(day))
    }

    /// Move the clock to a new instant.
    pub fn set(&self, at: DateTime<Utc>) {
        self.0.set(at);
    }

    /// Move the clock to midnight UTC of a calendar day.
    pub fn set_midnight(&self, day: NaiveDate) {
        self.set(midnight_utc(day));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

// ---------------------------------------------------------------------------
// EpochSeconds
// ---------------------------------------------------------------------------

/// An instant as fractional seconds since the Unix epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochSeconds(f64);

impl EpochSeconds {
    /// Wrap a raw epoch value.
    pub fn new(secs: f64) -> Self {
        Self(secs)
    }

    /// Convert an instant, keeping microsecond precision.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp() as f64 + f64::from(at.timestamp_subsec_micros()) / 1_000_000.0)
    }

    /// The raw epoch value.
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// This instant shifted forward by whole nights.
    pub fn plus_days(&self, days: u32) -> Self {
        Self(self.0 + f64::from(days) * f64::from(SECONDS_PER_DAY))
    }

    /// Convert back to a UTC instant. `None` for non-finite or out-of-range values.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        let secs = self.0.floor();
        let nanos = (((self.0 - secs) * 1_000_000_000.0).round() as u32).min(999_999_999);
        DateTime::from_timestamp(secs as i64, nanos)
    }

    /// The UTC calendar day containing this instant.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        self.to_datetime().map(|dt| dt.date_naive())
    }
}

impl std::fmt::Display for EpochSeconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&float_literal(self.0))
    }
}

// ---------------------------------------------------------------------------
// ArrivalDate
// ---------------------------------------------------------------------------

/// A calendar day in `DD/MM/YYYY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArrivalDate(NaiveDate);

impl ArrivalDate {
    /// The textual format, for `chrono` formatting.
    pub const FORMAT: &'static str = "%d/%m/%Y";

    /// Parse a `DD/MM/YYYY` date that must name a real calendar day.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ArrivalDateFormat`] when the shape is wrong,
    /// [`ValidationError::ArrivalDateNonexistent`] when the month is outside
    /// 1–12 or the day is zero or past the end of the month.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != 10 || chars[2] != '/' || chars[5] != '/' {
            return Err(ValidationError::ArrivalDateFormat);
        }
        let day = digits_value(&chars[0..2]).ok_or(ValidationError::ArrivalDateFormat)?;
        let month = digits_value(&chars[3..5]).ok_or(ValidationError::ArrivalDateFormat)?;
        let year = digits_value(&chars[6..10]).ok_or(ValidationError::ArrivalDateFormat)?;

        if !(1..=12).contains(&month) {
            return Err(ValidationError::ArrivalDateNonexistent);
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(ValidationError::ArrivalDateNonexistent);
        }
        let year = i32::try_from(year).map_err(|_| ValidationError::ArrivalDateNonexistent)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ValidationError::ArrivalDateNonexistent)
    }

    /// Parse a date that must also fall on or after `today`.
    ///
    /// # Errors
    ///
    /// As [`ArrivalDate::parse`], plus [`ValidationError::ArrivalDateInPast`].
    pub fn parse_not_before(value: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = Self::parse(value)?;
        if date.0 < today {
            return Err(ValidationError::ArrivalDateInPast);
        }
        Ok(date)
    }

    /// Wrap a calendar day.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The calendar day.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC at the start of this day.
    pub fn midnight(&self) -> EpochSeconds {
        EpochSeconds::from_datetime(midnight_utc(self.0))
    }
}

impl std::fmt::Display for ArrivalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl TryFrom<String> for ArrivalDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ArrivalDate> for String {
    fn from(value: ArrivalDate) -> Self {
        value.to_string()
    }
}

fn digits_value(chars: &[char]) -> Option<u32> {
    chars
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(10).map(|d| acc * 10 + d))
}

fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
