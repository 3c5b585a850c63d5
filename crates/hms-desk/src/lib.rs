//! # hms-desk — Front-Desk Workflow
//!
//! [`FrontDesk`] runs the three booking steps over a [`RecordStore`] and an
//! injected [`Clock`]:
//!
//! 1. **reserve**: validate the guest's fields, issue the reservation and
//!    return its localizer.
//! 2. **arrival**: read a stay request, re-derive the localizer from the
//!    stored reservation, confirm the arrival day and issue the room key.
//! 3. **checkout**: confirm the stay ends today and record the departure.
//!
//! Every refusal is a [`DeskError`] whose message is the literal text shown
//! to the operator. Accepted steps are logged at `info`, refusals at `warn`.
//!
//! [`RecordStore`]: hms_store::RecordStore
//! [`Clock`]: hms_core::Clock

pub mod config;
pub mod desk;
pub mod error;

pub use config::{ConfigError, DeskConfig};
pub use desk::{FrontDesk, REQUEST_EXTENSION};
pub use error::{messages, DeskError};
