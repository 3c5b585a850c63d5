//! # hms-state — Booking Records and Lifecycle
//!
//! A booking moves through four states:
//!
//! ```text
//! NO_RESERVATION ──reserve──▶ RESERVED ──arrival──▶ CHECKED_IN ──checkout──▶ CHECKED_OUT
//! ```
//!
//! Each step leaves a record behind, and the records are the only persisted
//! state: the lifecycle position of a booking is derived from which records
//! exist.
//!
//! - **Reservation** (`reservation.rs`): the validated request plus its
//!   creation instant and localizer. [`ReservationDocument`] is the tolerant
//!   read shape used when a stored reservation is checked for tampering.
//! - **Stay** (`stay.rs`): the stay request presented at check-in and the
//!   processed stay it produces, keyed by room key.
//! - **Checkout** (`checkout.rs`): the terminal record.
//! - **Lifecycle** (`lifecycle.rs`): [`BookingState`] and its transitions.

pub mod checkout;
pub mod lifecycle;
pub mod reservation;
pub mod stay;

pub use checkout::CheckoutRecord;
pub use lifecycle::{BookingState, LifecycleError};
pub use reservation::{
    ReservationDocument, ReservationFields, ReservationRecord, ReservationRequest,
};
pub use stay::{departure_day, StayRecord, StayRequest, StayRequestError};
