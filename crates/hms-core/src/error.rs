//! # Validation Errors
//!
//! Structured rejection reasons for every reservation field, built with
//! `thiserror`. Each variant renders the exact message reported to the
//! caller; the messages are part of the external contract and are asserted
//! verbatim by tests.
//!
//! Variants are grouped by field in the order the fields are validated.

use thiserror::Error;

/// A reservation field failed its format or business rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ── credit_card ─────────────────────────────────────────────────
    /// The credit card value was not a JSON string.
    #[error("credit_card is not a string")]
    CreditCardNotString,

    /// The credit card does not have exactly 16 characters.
    #[error("credit_card is not 16 characters long")]
    CreditCardLength,

    /// The credit card contains a non-digit character.
    #[error("credit_card must have 16 digits")]
    CreditCardDigits,

    /// The credit card check digit is wrong.
    #[error("credit_card does not follow the Luhn algorithm")]
    CreditCardLuhn,

    // ── name_surname ────────────────────────────────────────────────
    /// The name was not a JSON string.
    #[error("name_surname is not a string")]
    NameSurnameNotString,

    /// The name is shorter than 10 or longer than 50 characters.
    #[error("name_surname must be between 10 and 50 characters long")]
    NameSurnameLength,

    /// The name is not two or more tokens separated by single spaces.
    #[error("name_surname must contain at least 2 strings separated by a white space")]
    NameSurnameFormat,

    // ── id_card ─────────────────────────────────────────────────────
    /// The id card was not a JSON string.
    #[error("id_card is not a string")]
    IdCardNotString,

    /// The id card is not 8 digits followed by one table letter.
    #[error("id_card must have 8 digits and 1 final letter")]
    IdCardFormat,

    /// The id card letter does not match its digits.
    #[error("invalid letter for id_card")]
    IdCardLetter,

    // ── phone_number ────────────────────────────────────────────────
    /// The phone number was not a JSON string.
    #[error("phone_number is not a string")]
    PhoneNumberNotString,

    /// The phone number does not have exactly 9 characters.
    #[error("phone_number is not 9 characters long")]
    PhoneNumberLength,

    /// The phone number contains a non-digit character.
    #[error("phone_number must have 9 digits")]
    PhoneNumberDigits,

    // ── room_type ───────────────────────────────────────────────────
    /// The room type was not a JSON string.
    #[error("room_type is not a string")]
    RoomTypeNotString,

    /// The room type is not `single`, `double`, or `suite`.
    #[error("invalid room_type value")]
    RoomTypeValue,

    // ── arrival_date ────────────────────────────────────────────────
    /// The arrival date was not a JSON string.
    #[error("arrival_date is not a string")]
    ArrivalDateNotString,

    /// The arrival date is not shaped `DD/MM/YYYY`.
    #[error("invalid arrival_date format \"DD/MM/YYYY\"")]
    ArrivalDateFormat,

    /// The arrival date is well-formed but names no calendar day.
    #[error("arrival_date does not exist")]
    ArrivalDateNonexistent,

    /// The arrival date lies before the current date.
    #[error("arrival_date before current date")]
    ArrivalDateInPast,

    // ── num_days ────────────────────────────────────────────────────
    /// The stay length was not a JSON integer.
    #[error("num_days is not an int")]
    NumDaysNotInt,

    /// The stay length is outside 1..=10.
    #[error("num_days must be between 1 and 10")]
    NumDaysRange,
}
