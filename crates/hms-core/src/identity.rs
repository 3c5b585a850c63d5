//! # Guest Identity Newtypes
//!
//! Validated newtypes for the guest-supplied fields of a reservation. Each
//! type has one fallible constructor (`parse`) and is otherwise immutable,
//! so holding a value is proof the field passed its rule.
//!
//! ## Validation
//!
//! - [`CreditCard`]: 16 ASCII digits satisfying the Luhn checksum.
//! - [`NameSurname`]: 10–50 characters, two or more tokens separated by
//!   single spaces, no leading or trailing space.
//! - [`IdCard`]: 8 ASCII digits and a checksum letter from [`ID_CARD_LETTERS`].
//! - [`PhoneNumber`]: 9 ASCII digits.
//!
//! Lengths count Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Checksum letters for identity cards, indexed by `number % 23`.
pub const ID_CARD_LETTERS: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V',
    'H', 'L', 'C', 'K', 'E',
];

fn is_all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if a string of ASCII digits satisfies the Luhn checksum.
///
/// The rightmost digit is the check digit. The remaining digits are walked
/// right to left, doubling every second digit starting with the first one
/// visited; doubled values of 10 or more have 9 subtracted. The check digit
/// must equal `(10 - sum % 10) % 10`.
///
/// Returns false for an empty string or any non-digit character.
pub fn luhn_valid(digits: &str) -> bool {
    let values: Option<Vec<u32>> = digits.chars().map(|c| c.to_digit(10)).collect();
    let Some((check, payload)) = values.as_deref().and_then(|v| v.split_last()) else {
        return false;
    };

    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled >= 10 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    *check == (10 - sum % 10) % 10
}

// ---------------------------------------------------------------------------
// CreditCard
// ---------------------------------------------------------------------------

/// A 16-digit payment card number with a valid Luhn check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreditCard(String);

impl CreditCard {
    /// Required number of digits.
    pub const LENGTH: usize = 16;

    /// Parse a card number.
    ///
    /// # Errors
    ///
    /// [`ValidationError::CreditCardLength`], [`ValidationError::CreditCardDigits`],
    /// or [`ValidationError::CreditCardLuhn`], checked in that order.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.chars().count() != Self::LENGTH {
            return Err(ValidationError::CreditCardLength);
        }
        if !is_all_digits(value) {
            return Err(ValidationError::CreditCardDigits);
        }
        if !luhn_valid(value) {
            return Err(ValidationError::CreditCardLuhn);
        }
        Ok(Self(value.to_string()))
    }

    /// Access the card number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CreditCard {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CreditCard> for String {
    fn from(value: CreditCard) -> Self {
        value.0
    }
}

impl std::fmt::Display for CreditCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// NameSurname
// ---------------------------------------------------------------------------

/// A guest's full name: at least two space-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameSurname(String);

impl NameSurname {
    /// Minimum length in characters.
    pub const MIN_LENGTH: usize = 10;
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a full name.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NameSurnameLength`] when outside 10–50 characters,
    /// [`ValidationError::NameSurnameFormat`] for a leading or trailing space,
    /// two consecutive spaces, or no space at all.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let len = value.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&len) {
            return Err(ValidationError::NameSurnameLength);
        }
        if value.starts_with(' ') || value.ends_with(' ') {
            return Err(ValidationError::NameSurnameFormat);
        }
        if value.contains("  ") || !value.contains(' ') {
            return Err(ValidationError::NameSurnameFormat);
        }
        Ok(Self(value.to_string()))
    }

    /// Access the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NameSurname {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NameSurname> for String {
    fn from(value: NameSurname) -> Self {
        value.0
    }
}

impl std::fmt::Display for NameSurname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// IdCard
// ---------------------------------------------------------------------------

/// A national identity card number: 8 digits and a checksum letter.
///
/// The letter is `ID_CARD_LETTERS[number % 23]`. Uniqueness across the
/// reservation store is a store-level rule and is checked by the front desk,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdCard(String);

impl IdCard {
    /// Required length in characters.
    pub const LENGTH: usize = 9;

    /// Parse an identity card number.
    ///
    /// # Errors
    ///
    /// [`ValidationError::IdCardFormat`] when the value is not 8 digits and a
    /// table letter, [`ValidationError::IdCardLetter`] when the letter does
    /// not match the digits.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != Self::LENGTH {
            return Err(ValidationError::IdCardFormat);
        }
        let (digits, letter) = chars.split_at(Self::LENGTH - 1);
        if !digits.iter().all(char::is_ascii_digit) {
            return Err(ValidationError::IdCardFormat);
        }
        let letter = letter[0];
        if !ID_CARD_LETTERS.contains(&letter) {
            return Err(ValidationError::IdCardFormat);
        }

        let number = digits
            .iter()
            .filter_map(|c| c.to_digit(10))
            .fold(0u32, |acc, d| acc * 10 + d);
        if letter != Self::letter_for(number) {
            return Err(ValidationError::IdCardLetter);
        }
        Ok(Self(value.to_string()))
    }

    /// The checksum letter for an 8-digit number.
    pub fn letter_for(number: u32) -> char {
        ID_CARD_LETTERS[(number % 23) as usize]
    }

    /// Access the identity card number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdCard {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdCard> for String {
    fn from(value: IdCard) -> Self {
        value.0
    }
}

impl std::fmt::Display for IdCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// PhoneNumber
// ---------------------------------------------------------------------------

/// A 9-digit contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Required number of digits.
    pub const LENGTH: usize = 9;

    /// Parse a phone number.
    ///
    /// # Errors
    ///
    /// [`ValidationError::PhoneNumberLength`] or [`ValidationError::PhoneNumberDigits`].
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.chars().count() != Self::LENGTH {
            return Err(ValidationError::PhoneNumberLength);
        }
        if !is_all_digits(value) {
            return Err(ValidationError::PhoneNumberDigits);
        }
        Ok(Self(value.to_string()))
    }

    /// Access the phone number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Independent check-digit computation used as the property oracle.
    fn expected_check_digit(payload: &[u32]) -> u32 {
        let mut sum = 0;
        for (i, d) in payload.iter().rev().enumerate() {
            let v = if i % 2 == 0 { d * 2 } else { *d };
            sum += v / 10 + v % 10;
        }
        (10 - sum % 10) % 10
    }

    proptest! {
        /// A 16-digit string is accepted iff its last digit is the Luhn check digit.
        #[test]
        fn credit_card_accepted_iff_luhn_holds(digits in prop::collection::vec(0u32..10, 16)) {
            let s: String = digits.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect();
            let expected = expected_check_digit(&digits[..15]) == digits[15];
            prop_assert_eq!(CreditCard::parse(&s).is_ok(), expected);
        }

        /// Every 8-digit number has exactly one accepted letter.
        #[test]
        fn id_card_exactly_one_letter(n in 0u32..100_000_000) {
            let accepted: Vec<char> = ID_CARD_LETTERS
                .iter()
                .copied()
                .filter(|l| IdCard::parse(&format!("{n:08}{l}")).is_ok())
                .collect();
            prop_assert_eq!(accepted, vec![IdCard::letter_for(n)]);
        }
    }
}
