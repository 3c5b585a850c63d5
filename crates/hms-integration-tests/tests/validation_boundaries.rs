//! # Reservation Validation Boundaries
//!
//! Each rule at and either side of its limit, through the desk, so the first
//! failing field determines the reported error.

use chrono::NaiveDate;
use hms_core::{FixedClock, ValidationError};
use hms_desk::{DeskError, FrontDesk};
use hms_state::ReservationRequest;
use hms_store::{Collection, MemoryStore, RecordStore};
use serde_json::json;

fn desk() -> FrontDesk<MemoryStore, FixedClock> {
    FrontDesk::new(
        MemoryStore::new(),
        FixedClock::at_midnight(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
    )
}

fn john() -> ReservationRequest {
    ReservationRequest {
        credit_card: "5105105105105100".into(),
        name_surname: "John Smith".into(),
        id_card: "12345678Z".into(),
        phone_number: "612345789".into(),
        room_type: "single".into(),
        arrival_date: "01/07/2024".into(),
        num_days: 1,
    }
}

fn reject(request: ReservationRequest, expected: ValidationError) {
    let err = desk().reserve(&request).unwrap_err();
    assert_eq!(err.to_string(), expected.to_string(), "{request:?}");
    assert!(matches!(err, DeskError::Validation(_)));
}

fn accept(request: ReservationRequest) {
    let desk = desk();
    desk.reserve(&request)
        .unwrap_or_else(|e| panic!("{request:?} rejected: {e}"));
    assert_eq!(desk.store().len(), 1);
}

// ---------------------------------------------------------------------------
// Credit card
// ---------------------------------------------------------------------------

#[test]
fn credit_card_rules() {
    accept(ReservationRequest { credit_card: "4111111111111111".into(), ..john() });
    reject(
        ReservationRequest { credit_card: "510510510510510".into(), ..john() },
        ValidationError::CreditCardLength,
    );
    reject(
        ReservationRequest { credit_card: "51051051051051000".into(), ..john() },
        ValidationError::CreditCardLength,
    );
    reject(
        ReservationRequest { credit_card: "510510510510510X".into(), ..john() },
        ValidationError::CreditCardDigits,
    );
    reject(
        ReservationRequest { credit_card: "5105105105105101".into(), ..john() },
        ValidationError::CreditCardLuhn,
    );
}

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

#[test]
fn name_length_limits() {
    let name = |len: usize| format!("Jo {}", "x".repeat(len - 3));
    reject(
        ReservationRequest { name_surname: name(9), ..john() },
        ValidationError::NameSurnameLength,
    );
    accept(ReservationRequest { name_surname: name(10), ..john() });
    accept(ReservationRequest { name_surname: name(50), ..john() });
    reject(
        ReservationRequest { name_surname: name(51), ..john() },
        ValidationError::NameSurnameLength,
    );
}

#[test]
fn name_needs_two_words() {
    reject(
        ReservationRequest { name_surname: "JohnSmithers".into(), ..john() },
        ValidationError::NameSurnameFormat,
    );
    accept(ReservationRequest { name_surname: "John Jack Smith".into(), ..john() });
}

// ---------------------------------------------------------------------------
// Id card
// ---------------------------------------------------------------------------

#[test]
fn id_card_rules() {
    accept(ReservationRequest { id_card: "00000000T".into(), ..john() });
    reject(
        ReservationRequest { id_card: "1234567Z".into(), ..john() },
        ValidationError::IdCardFormat,
    );
    reject(
        ReservationRequest { id_card: "1234567AZ".into(), ..john() },
        ValidationError::IdCardFormat,
    );
    reject(
        ReservationRequest { id_card: "12345678A".into(), ..john() },
        ValidationError::IdCardLetter,
    );
}

// ---------------------------------------------------------------------------
// Phone, room type
// ---------------------------------------------------------------------------

#[test]
fn phone_number_rules() {
    reject(
        ReservationRequest { phone_number: "61234578".into(), ..john() },
        ValidationError::PhoneNumberLength,
    );
    reject(
        ReservationRequest { phone_number: "6123457890".into(), ..john() },
        ValidationError::PhoneNumberLength,
    );
    reject(
        ReservationRequest { phone_number: "61234578X".into(), ..john() },
        ValidationError::PhoneNumberDigits,
    );
}

#[test]
fn room_types() {
    for room in ["single", "double", "suite"] {
        accept(ReservationRequest { room_type: room.into(), ..john() });
    }
    for room in ["Single", "triple", ""] {
        reject(
            ReservationRequest { room_type: room.into(), ..john() },
            ValidationError::RoomTypeValue,
        );
    }
}

// ---------------------------------------------------------------------------
// Dates and nights
// ---------------------------------------------------------------------------

#[test]
fn arrival_date_rules() {
    accept(ReservationRequest { arrival_date: "29/02/2028".into(), ..john() });
    reject(
        ReservationRequest { arrival_date: "30/06/2024".into(), ..john() },
        ValidationError::ArrivalDateInPast,
    );
    reject(
        ReservationRequest { arrival_date: "31/06/2024".into(), ..john() },
        ValidationError::ArrivalDateNonexistent,
    );
    reject(
        ReservationRequest { arrival_date: "00/07/2024".into(), ..john() },
        ValidationError::ArrivalDateNonexistent,
    );
    reject(
        ReservationRequest { arrival_date: "01/13/2024".into(), ..john() },
        ValidationError::ArrivalDateNonexistent,
    );
    reject(
        ReservationRequest { arrival_date: "1/7/2024".into(), ..john() },
        ValidationError::ArrivalDateFormat,
    );
    reject(
        ReservationRequest { arrival_date: "2024-07-01".into(), ..john() },
        ValidationError::ArrivalDateFormat,
    );
}

#[test]
fn num_days_limits() {
    for days in [0, 11, -1] {
        reject(ReservationRequest { num_days: days, ..john() }, ValidationError::NumDaysRange);
    }
    for days in [1, 10] {
        accept(ReservationRequest { num_days: days, ..john() });
    }
}

// ---------------------------------------------------------------------------
// Ordering and JSON input
// ---------------------------------------------------------------------------

#[test]
fn first_failing_field_wins() {
    let request = ReservationRequest {
        name_surname: "JohnSmithers".into(),
        phone_number: "1".into(),
        num_days: 0,
        ..john()
    };
    reject(request, ValidationError::NameSurnameFormat);
}

#[test]
fn duplicate_is_checked_before_phone() {
    let desk = desk();
    desk.reserve(&john()).unwrap();
    let again = ReservationRequest { phone_number: "1".into(), ..john() };
    assert!(matches!(
        desk.reserve(&again).unwrap_err(),
        DeskError::DuplicateReservation
    ));
}

#[test]
fn json_type_errors() {
    let desk = desk();
    let base = json!({
        "credit_card": "5105105105105100",
        "name_surname": "John Smith",
        "id_card": "12345678Z",
        "phone_number": "612345789",
        "room_type": "single",
        "arrival_date": "01/07/2024",
        "num_days": 1
    });
    let cases = [
        ("credit_card", json!(5105105105105100u64), ValidationError::CreditCardNotString),
        ("phone_number", json!(612345789), ValidationError::PhoneNumberNotString),
        ("num_days", json!("1"), ValidationError::NumDaysNotInt),
        ("num_days", json!(1.0), ValidationError::NumDaysNotInt),
    ];
    for (field, value, expected) in cases {
        let mut doc = base.clone();
        doc[field] = value;
        let err = desk.reserve_json(&doc).unwrap_err();
        assert_eq!(err.to_string(), expected.to_string(), "{field}");
    }
    assert!(desk.store().list_keys(Collection::Reservations).unwrap().is_empty());

    assert!(desk.reserve_json(&base).is_ok());
}
