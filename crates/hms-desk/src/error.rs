//! # Front-Desk Errors
//!
//! The caller-facing taxonomy. The message-carrying variants display exactly
//! the message a guest or operator sees; the literal texts are collected in
//! [`messages`].

use hms_core::ValidationError;
use hms_state::{BookingState, LifecycleError};
use hms_store::StoreError;
use thiserror::Error;

/// Literal messages reported by the workflow.
pub mod messages {
    /// A stay request reference does not name a `.json` document.
    pub const NOT_JSON_FILE: &str = "The file is not in JSON format";
    /// No stay request under the reference.
    pub const REQUEST_NOT_FOUND: &str = "The data file cannot be found.";
    /// The stay request is not the expected two-key object.
    pub const UNEXPECTED_STRUCTURE: &str = "The JSON does not have the expected structure.";
    /// Stay request values have the wrong length or disagree with the reservation.
    pub const INVALID_VALUES: &str = "The JSON data does not have valid values.";
    /// No reservation for the presented id card.
    pub const WRONG_FILE_PATH: &str = "Wrong file or file path";
    /// The stored reservation is not JSON.
    pub const WRONG_JSON_FORMAT: &str = "JSON Decode Error - Wrong JSON Format";
    /// The stored reservation lacks a key or has a mistyped one.
    pub const INVALID_JSON_KEY: &str = "JSON Decode Error - Invalid JSON Key";
    /// The recomputed localizer differs from the presented one.
    pub const LOCATOR_MISMATCH: &str = "The locator does not correspond to the stored data.";
    /// Check-in is not on the reserved arrival day.
    pub const ARRIVAL_MISMATCH: &str = "The arrival date does not correspond to the reservation date";
    /// The presented room key is malformed.
    pub const INVALID_ROOM_KEY: &str = "Invalid room key format.";
    /// No processed stay under the room key.
    pub const ROOM_KEY_NOT_FOUND: &str = "Room key not found in processed stays store.";
}

/// A workflow step was refused. Nothing is written when any of these is returned.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Input failed a format or business rule.
    #[error("{0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Stored and presented data disagree.
    #[error("{0}")]
    InconsistentData(String),

    /// A document is not shaped as expected.
    #[error("{0}")]
    Format(String),

    /// The id card already holds a reservation.
    #[error("a client with specified id_card already has a reservation")]
    DuplicateReservation,

    /// The stay does not end today.
    #[error("Departure date is not valid.")]
    InvalidDeparture,

    /// The stay has already been checked out.
    #[error("Room key has already been checked out.")]
    AlreadyCheckedOut,

    /// The booking is not in a state that allows this step.
    #[error("reservation for {id_card} is already {state}")]
    InvalidTransition {
        /// Id card of the booking.
        id_card: String,
        /// State the booking is in.
        state: BookingState,
        /// The refused transition.
        #[source]
        source: LifecycleError,
    },

    /// The record store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl DeskError {
    /// Short category label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::InconsistentData(_) => "inconsistent_data",
            Self::Format(_) => "format",
            Self::DuplicateReservation => "duplicate_reservation",
            Self::InvalidDeparture => "invalid_departure",
            Self::AlreadyCheckedOut => "already_checked_out",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::Store(_) => "store",
        }
    }

    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }

    pub(crate) fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub(crate) fn inconsistent(message: &str) -> Self {
        Self::InconsistentData(message.to_string())
    }

    pub(crate) fn format(message: &str) -> Self {
        Self::Format(message.to_string())
    }
}

impl From<ValidationError> for DeskError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_literal_message() {
        assert_eq!(
            DeskError::format(messages::UNEXPECTED_STRUCTURE).to_string(),
            "The JSON does not have the expected structure."
        );
        assert_eq!(
            DeskError::DuplicateReservation.to_string(),
            "a client with specified id_card already has a reservation"
        );
        assert_eq!(DeskError::InvalidDeparture.to_string(), "Departure date is not valid.");
        assert_eq!(
            DeskError::from(ValidationError::IdCardLetter).to_string(),
            "invalid letter for id_card"
        );
    }

    #[test]
    fn transition_message() {
        let err = DeskError::InvalidTransition {
            id_card: "12345678Z".into(),
            state: BookingState::CheckedIn,
            source: LifecycleError::InvalidTransition {
                from: BookingState::CheckedIn,
                to: BookingState::CheckedIn,
            },
        };
        assert_eq!(err.to_string(), "reservation for 12345678Z is already CHECKED_IN");
        assert_eq!(err.kind(), "invalid_transition");
    }
}
