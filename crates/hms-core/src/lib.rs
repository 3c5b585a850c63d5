#![deny(missing_docs)]

//! # hms-core — Foundational Types for the Hotel Management Stack
//!
//! This crate defines the types every other crate in the workspace builds on.
//! It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Parse, don't validate.** Every reservation field is a newtype with a
//!    single fallible constructor. An [`IdCard`] that exists has a correct
//!    checksum letter; a [`CreditCard`] that exists passes Luhn. Records are
//!    assembled from these types only, so an invalid record cannot be built.
//!
//! 2. **[`CanonicalText`] is the sole path to fingerprint computation.** The
//!    localizer and the room key are digests over fixed textual renderings.
//!    Both renderings are produced here and nowhere else, so a digest can never
//!    be taken over an ad-hoc string.
//!
//! 3. **Injected time.** Every "now" flows through the [`Clock`] trait. Tests
//!    freeze it with [`FixedClock`]; production uses [`SystemClock`].
//!
//! 4. **[`ValidationError`] carries the literal rejection reason.** Each
//!    variant renders the exact human-readable message reported to callers.

pub mod booking;
pub mod canonical;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use booking::{NumDays, RoomType};
pub use canonical::{float_literal, quote_literal, CanonicalText, DictValue};
pub use error::ValidationError;
pub use identity::{CreditCard, IdCard, NameSurname, PhoneNumber};
pub use temporal::{ArrivalDate, Clock, EpochSeconds, FixedClock, SystemClock, SECONDS_PER_DAY};
