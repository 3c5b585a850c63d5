//! # On-Disk Layout
//!
//! One directory per collection under the store root, one pretty-printed
//! JSON document per record named after its key.

use std::fs;

use chrono::NaiveDate;
use hms_core::FixedClock;
use hms_desk::FrontDesk;
use hms_state::ReservationRequest;
use hms_store::{Collection, JsonFileStore};
use serde_json::{json, Value};
use tempfile::TempDir;

const LOCALIZER: &str = "385148f30bfe0c80599f7c844216578a";
const ROOM_KEY: &str = "400f35f55fc2be1b5022aec0e2509cd53ca6cd9017e6e5da4cfe375d18758617";

fn read_json(path: &std::path::Path) -> (String, Value) {
    let text = fs::read_to_string(path).unwrap();
    let value = serde_json::from_str(&text).unwrap();
    (text, value)
}

#[test]
fn full_booking_leaves_one_file_per_collection() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let desk = FrontDesk::new(
        JsonFileStore::new(root),
        FixedClock::at_midnight(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
    );
    desk.reserve(&ReservationRequest {
        credit_card: "5105105105105100".into(),
        name_surname: "John Smith".into(),
        id_card: "12345678Z".into(),
        phone_number: "612345789".into(),
        room_type: "single".into(),
        arrival_date: "01/07/2024".into(),
        num_days: 1,
    })
    .unwrap();
    desk.submit_stay_request("12345678Z", LOCALIZER).unwrap();
    desk.arrival("12345678Z.json").unwrap();
    desk.clock()
        .set_midnight(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
    desk.checkout(ROOM_KEY).unwrap();

    let (text, reservation) = read_json(&root.join("reservations_store/12345678Z.json"));
    assert!(text.starts_with("{\n    \""), "four-space indent: {text}");
    assert_eq!(
        reservation,
        json!({
            "id_card": "12345678Z",
            "name_surname": "John Smith",
            "credit_card": "5105105105105100",
            "phone_number": "612345789",
            "reservation_date": 1_719_792_000.0,
            "arrival_date": "01/07/2024",
            "num_days": 1,
            "room_type": "single",
            "localizer": LOCALIZER
        })
    );

    let (_, request) = read_json(&root.join("stays_store/12345678Z.json"));
    assert_eq!(request, json!({"IdCard": "12345678Z", "Localizer": LOCALIZER}));

    let (_, stay) = read_json(&root.join(format!("processed_stays_store/{ROOM_KEY}.json")));
    assert_eq!(stay["alg"], "SHA-256");
    assert_eq!(stay["type"], "single");
    assert_eq!(stay["idCard"], "12345678Z");
    assert_eq!(stay["room_key"], ROOM_KEY);

    let (_, checkout) = read_json(&root.join(format!("checkouts_store/{ROOM_KEY}.json")));
    assert_eq!(
        checkout,
        json!({"room_key": ROOM_KEY, "departure_date": "02/07/2024"})
    );
}

#[test]
fn collection_directories_match_their_names() {
    let store = JsonFileStore::new("/srv/hms");
    let dirs: Vec<_> = Collection::ALL
        .iter()
        .map(|c| store.collection_dir(*c))
        .collect();
    assert_eq!(
        dirs,
        vec![
            std::path::PathBuf::from("/srv/hms/reservations_store"),
            std::path::PathBuf::from("/srv/hms/stays_store"),
            std::path::PathBuf::from("/srv/hms/processed_stays_store"),
            std::path::PathBuf::from("/srv/hms/checkouts_store"),
        ]
    );
}

#[test]
fn refused_steps_write_nothing() {
    let dir = TempDir::new().unwrap();
    let desk = FrontDesk::new(
        JsonFileStore::new(dir.path()),
        FixedClock::at_midnight(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
    );
    let bad = ReservationRequest {
        credit_card: "5105105105105101".into(),
        name_surname: "John Smith".into(),
        id_card: "12345678Z".into(),
        phone_number: "612345789".into(),
        room_type: "single".into(),
        arrival_date: "01/07/2024".into(),
        num_days: 1,
    };
    assert!(desk.reserve(&bad).is_err());
    assert!(desk.checkout(ROOM_KEY).is_err());
    assert!(!dir.path().join("reservations_store").exists());
    assert!(!dir.path().join("checkouts_store").exists());
}
