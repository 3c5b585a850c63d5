//! # Front Desk
//!
//! The three workflow steps and the read operations over their records.
//!
//! Every step validates completely before it writes, and writes at most one
//! record. A failed step leaves the store untouched.
//!
//! ## Check-in chain
//!
//! ```text
//! stay request ──IdCard──▶ reservation ──recompute localizer──▶ compare
//!                                      └─arrival day == today─▶ stay ──room key──▶ processed stays
//! ```

use hms_core::{
    ArrivalDate, Clock, CreditCard, EpochSeconds, IdCard, NameSurname, NumDays, PhoneNumber,
    RoomType,
};
use hms_crypto::{is_lower_hex, Localizer, RoomKey};
use hms_state::{
    departure_day, BookingState, CheckoutRecord, ReservationDocument, ReservationFields,
    ReservationRecord, ReservationRequest, StayRecord, StayRequest, StayRequestError,
};
use hms_store::{Collection, RecordStore, StoreError};
use serde_json::Value;

use crate::config::DeskConfig;
use crate::error::{messages, DeskError};

/// Extension a stay request reference must carry.
pub const REQUEST_EXTENSION: &str = ".json";

/// The hotel front desk over a record store and a clock.
#[derive(Debug)]
pub struct FrontDesk<S, C> {
    store: S,
    clock: C,
    room_key_length: usize,
}

impl<S: RecordStore, C: Clock> FrontDesk<S, C> {
    /// A desk with the default configuration.
    pub fn new(store: S, clock: C) -> Self {
        Self::with_config(store, clock, &DeskConfig::default())
    }

    /// A desk honouring `config.room_key_length`.
    ///
    /// `config.store_root` is not used here; the caller opens the store.
    pub fn with_config(store: S, clock: C, config: &DeskConfig) -> Self {
        Self {
            store,
            clock,
            room_key_length: config.room_key_length,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ─── Reserve ─────────────────────────────────────────────────────

    /// Validate and store a reservation, returning its localizer.
    ///
    /// Fields are checked in order: credit card, name, id card, no existing
    /// reservation for the id card, phone, room type, arrival date (not before
    /// today), number of days. The first failure is returned.
    pub fn reserve(&self, request: &ReservationRequest) -> Result<Localizer, DeskError> {
        let outcome = self.try_reserve(request);
        match &outcome {
            Ok(localizer) => tracing::info!(
                id_card = %request.id_card,
                localizer = %localizer,
                "reservation stored"
            ),
            Err(e) => tracing::warn!(
                id_card = %request.id_card,
                kind = e.kind(),
                error = %e,
                "reservation rejected"
            ),
        }
        outcome
    }

    /// [`reserve`](Self::reserve) from a JSON object, type-checking each field first.
    pub fn reserve_json(&self, value: &Value) -> Result<Localizer, DeskError> {
        let request = ReservationRequest::from_value(value).map_err(|e| {
            tracing::warn!(kind = "validation", error = %e, "reservation rejected");
            DeskError::from(e)
        })?;
        self.reserve(&request)
    }

    fn try_reserve(&self, request: &ReservationRequest) -> Result<Localizer, DeskError> {
        let now = self.clock.now();

        let credit_card = CreditCard::parse(&request.credit_card)?;
        let name_surname = NameSurname::parse(&request.name_surname)?;
        let id_card = IdCard::parse(&request.id_card)?;
        if self.has_reservation(&id_card)? {
            return Err(DeskError::DuplicateReservation);
        }
        let phone_number = PhoneNumber::parse(&request.phone_number)?;
        let room_type = RoomType::parse(&request.room_type)?;
        let arrival_date = ArrivalDate::parse_not_before(&request.arrival_date, now.date_naive())?;
        let num_days = NumDays::new(request.num_days)?;

        let record = ReservationRecord::issue(
            ReservationFields {
                credit_card,
                name_surname,
                id_card,
                phone_number,
                room_type,
                arrival_date,
                num_days,
            },
            EpochSeconds::from_datetime(now),
        );
        self.store
            .put_record(Collection::Reservations, record.id_card.as_str(), &record)?;
        Ok(record.localizer)
    }

    fn has_reservation(&self, id_card: &IdCard) -> Result<bool, DeskError> {
        Ok(self
            .store
            .list_keys(Collection::Reservations)?
            .iter()
            .any(|key| key == id_card.as_str()))
    }

    // ─── Stay request ────────────────────────────────────────────────

    /// Write a stay request for a guest and return its reference.
    pub fn submit_stay_request(&self, id_card: &str, localizer: &str) -> Result<String, DeskError> {
        let request = StayRequest {
            id_card: id_card.to_string(),
            localizer: localizer.to_string(),
        };
        let value = serde_json::to_value(&request).map_err(StoreError::from)?;
        StayRequest::from_value(&value)
            .map_err(|_| DeskError::validation(messages::INVALID_VALUES))?;
        self.store
            .put(Collection::StayRequests, id_card, &value)?;
        tracing::debug!(id_card, "stay request written");
        Ok(format!("{id_card}{REQUEST_EXTENSION}"))
    }

    // ─── Arrival ─────────────────────────────────────────────────────

    /// Check a guest in from a stay request and return the room key.
    ///
    /// `request_ref` names a stay request document, `<IdCard>.json`.
    pub fn arrival(&self, request_ref: &str) -> Result<RoomKey, DeskError> {
        let outcome = self.try_arrival(request_ref);
        match &outcome {
            Ok(room_key) => tracing::info!(request = request_ref, room_key = %room_key, "guest checked in"),
            Err(e) => tracing::warn!(
                request = request_ref,
                kind = e.kind(),
                error = %e,
                "check-in rejected"
            ),
        }
        outcome
    }

    fn try_arrival(&self, request_ref: &str) -> Result<RoomKey, DeskError> {
        let key = request_ref
            .strip_suffix(REQUEST_EXTENSION)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| DeskError::format(messages::NOT_JSON_FILE))?;

        let request = self.load_stay_request(key)?;
        let reservation = self.load_reservation_document(&request.id_card)?;

        if reservation.localizer != request.localizer || reservation.id_card != request.id_card {
            return Err(DeskError::inconsistent(messages::INVALID_VALUES));
        }
        let localizer = reservation.recomputed_localizer();
        if localizer.as_str() != request.localizer {
            return Err(DeskError::inconsistent(messages::LOCATOR_MISMATCH));
        }

        let now = self.clock.now();
        let arrival_day = reservation.arrival_day().map(|d| d.date());
        if arrival_day != Some(now.date_naive()) {
            return Err(DeskError::inconsistent(messages::ARRIVAL_MISMATCH));
        }

        let state = self.state_of(&request.id_card)?;
        state
            .transition(BookingState::CheckedIn)
            .map_err(|source| DeskError::InvalidTransition {
                id_card: request.id_card.clone(),
                state: source.current(),
                source,
            })?;

        let stay = StayRecord::check_in(&reservation, localizer, EpochSeconds::from_datetime(now));
        self.store
            .put_record(Collection::ProcessedStays, stay.room_key.as_str(), &stay)?;
        Ok(stay.room_key)
    }

    fn load_stay_request(&self, key: &str) -> Result<StayRequest, DeskError> {
        let value = match self.store.get(Collection::StayRequests, key) {
            Ok(value) => value,
            Err(StoreError::NotFound { .. } | StoreError::InvalidKey(_)) => {
                return Err(DeskError::not_found(messages::REQUEST_NOT_FOUND))
            }
            Err(StoreError::Malformed { .. }) => {
                return Err(DeskError::format(messages::UNEXPECTED_STRUCTURE))
            }
            Err(e) => return Err(e.into()),
        };
        StayRequest::from_value(&value).map_err(|e| match e {
            StayRequestError::Structure => DeskError::format(messages::UNEXPECTED_STRUCTURE),
            StayRequestError::Values => DeskError::validation(messages::INVALID_VALUES),
        })
    }

    fn load_reservation_value(&self, id_card: &str) -> Result<Value, DeskError> {
        match self.store.get(Collection::Reservations, id_card) {
            Ok(value) => Ok(value),
            Err(StoreError::NotFound { .. } | StoreError::InvalidKey(_)) => {
                Err(DeskError::not_found(messages::WRONG_FILE_PATH))
            }
            Err(StoreError::Malformed { .. }) => {
                Err(DeskError::format(messages::WRONG_JSON_FORMAT))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn load_reservation_document(&self, id_card: &str) -> Result<ReservationDocument, DeskError> {
        let value = self.load_reservation_value(id_card)?;
        serde_json::from_value(value).map_err(|_| DeskError::format(messages::INVALID_JSON_KEY))
    }

    // ─── Checkout ────────────────────────────────────────────────────

    /// Check a guest out on the stay's departure day.
    pub fn checkout(&self, room_key: &str) -> Result<CheckoutRecord, DeskError> {
        let outcome = self.try_checkout(room_key);
        match &outcome {
            Ok(record) => tracing::info!(
                room_key,
                departure_date = %record.departure_date,
                "guest checked out"
            ),
            Err(e) => tracing::warn!(room_key, kind = e.kind(), error = %e, "checkout rejected"),
        }
        outcome
    }

    fn try_checkout(&self, room_key: &str) -> Result<CheckoutRecord, DeskError> {
        if room_key.chars().count() != self.room_key_length || !is_lower_hex(room_key) {
            return Err(DeskError::validation(messages::INVALID_ROOM_KEY));
        }

        let stay = match self.store.get(Collection::ProcessedStays, room_key) {
            Ok(stay) => Some(stay),
            Err(StoreError::NotFound { .. } | StoreError::InvalidKey(_)) => {
                return Err(DeskError::not_found(messages::ROOM_KEY_NOT_FOUND))
            }
            Err(StoreError::Malformed { .. }) => None,
            Err(e) => return Err(e.into()),
        };
        if self.store.contains(Collection::Checkouts, room_key)? {
            return Err(DeskError::AlreadyCheckedOut);
        }

        let today = self.clock.today();
        let departs = stay.as_ref().and_then(departure_day);
        if departs != Some(today) {
            return Err(DeskError::InvalidDeparture);
        }

        let key = RoomKey::parse(room_key)
            .map_err(|_| DeskError::validation(messages::INVALID_ROOM_KEY))?;
        let record = CheckoutRecord::new(key, today);
        self.store
            .put_record(Collection::Checkouts, room_key, &record)?;
        Ok(record)
    }

    // ─── Reads ───────────────────────────────────────────────────────

    /// The stored reservation for an id card.
    pub fn reservation(&self, id_card: &str) -> Result<ReservationRecord, DeskError> {
        let value = self.load_reservation_value(id_card)?;
        serde_json::from_value(value).map_err(|_| DeskError::format(messages::INVALID_JSON_KEY))
    }

    /// The processed stay under a room key.
    pub fn stay(&self, room_key: &str) -> Result<StayRecord, DeskError> {
        let value = match self.store.get(Collection::ProcessedStays, room_key) {
            Ok(value) => value,
            Err(StoreError::NotFound { .. } | StoreError::InvalidKey(_)) => {
                return Err(DeskError::not_found(messages::ROOM_KEY_NOT_FOUND))
            }
            Err(StoreError::Malformed { .. }) => {
                return Err(DeskError::format(messages::WRONG_JSON_FORMAT))
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_value(value).map_err(|_| DeskError::format(messages::INVALID_JSON_KEY))
    }

    /// Where the booking for an id card stands, derived from the stored records.
    pub fn booking_state(&self, id_card: &str) -> Result<BookingState, DeskError> {
        self.state_of(id_card)
    }

    fn state_of(&self, id_card: &str) -> Result<BookingState, DeskError> {
        match self.store.contains(Collection::Reservations, id_card) {
            Ok(true) => {}
            Ok(false) | Err(StoreError::InvalidKey(_)) => return Ok(BookingState::NoReservation),
            Err(e) => return Err(e.into()),
        }
        let Some(room_key) = self.find_stay(id_card)? else {
            return Ok(BookingState::Reserved);
        };
        if self.store.contains(Collection::Checkouts, &room_key)? {
            Ok(BookingState::CheckedOut)
        } else {
            Ok(BookingState::CheckedIn)
        }
    }

    /// Room key of the processed stay belonging to an id card, if any.
    fn find_stay(&self, id_card: &str) -> Result<Option<String>, DeskError> {
        for key in self.store.list_keys(Collection::ProcessedStays)? {
            let stay = match self.store.get(Collection::ProcessedStays, &key) {
                Ok(stay) => stay,
                Err(StoreError::Malformed { .. } | StoreError::NotFound { .. }) => continue,
                Err(e) => return Err(e.into()),
            };
            if stay.get("idCard").and_then(Value::as_str) == Some(id_card) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
