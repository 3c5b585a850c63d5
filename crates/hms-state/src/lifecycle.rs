//! # Booking Lifecycle
//!
//! `NO_RESERVATION → RESERVED → CHECKED_IN → CHECKED_OUT`. Every transition
//! moves exactly one step forward; `CHECKED_OUT` is terminal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Booking State ───────────────────────────────────────────────────

/// Where a booking stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingState {
    /// No reservation exists for the id card.
    NoReservation,
    /// Reservation stored, guest not yet arrived.
    Reserved,
    /// Guest checked in; a processed stay exists.
    CheckedIn,
    /// Guest left; a checkout record exists (terminal).
    CheckedOut,
}

impl BookingState {
    /// The canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoReservation => "NO_RESERVATION",
            Self::Reserved => "RESERVED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
        }
    }

    /// Parse a canonical state name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NO_RESERVATION" => Some(Self::NoReservation),
            "RESERVED" => Some(Self::Reserved),
            "CHECKED_IN" => Some(Self::CheckedIn),
            "CHECKED_OUT" => Some(Self::CheckedOut),
            _ => None,
        }
    }

    /// The single state reachable from this one.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::NoReservation => Some(Self::Reserved),
            Self::Reserved => Some(Self::CheckedIn),
            Self::CheckedIn => Some(Self::CheckedOut),
            Self::CheckedOut => None,
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut)
    }

    /// Check that `to` is the next state.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::TerminalState`] from `CHECKED_OUT`,
    /// [`LifecycleError::InvalidTransition`] for any skip or step back.
    pub fn transition(self, to: BookingState) -> Result<BookingState, LifecycleError> {
        if self.is_terminal() {
            return Err(LifecycleError::TerminalState { state: self });
        }
        if self.next() != Some(to) {
            return Err(LifecycleError::InvalidTransition { from: self, to });
        }
        Ok(to)
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// A booking step was attempted out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The target is not the next state.
    #[error("invalid booking transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: BookingState,
        /// Attempted target state.
        to: BookingState,
    },

    /// The booking has already reached its terminal state.
    #[error("booking is in terminal state {state}")]
    TerminalState {
        /// The terminal state.
        state: BookingState,
    },
}

impl LifecycleError {
    /// The state the booking was in when the step was refused.
    pub fn current(&self) -> BookingState {
        match self {
            Self::InvalidTransition { from, .. } => *from,
            Self::TerminalState { state } => *state,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
