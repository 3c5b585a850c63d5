//! # Reserve Subcommand
//!
//! Validates a reservation and stores it, printing the localizer. Fields come
//! either from flags or from a JSON object file (`--from-json`), in which case
//! each field's JSON type is checked before its rules run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hms_core::Clock;
use hms_desk::FrontDesk;
use hms_state::ReservationRequest;
use hms_store::RecordStore;

/// Arguments for the `hms reserve` subcommand.
#[derive(Args, Debug)]
pub struct ReserveArgs {
    /// Read the reservation from a JSON object file instead of flags.
    #[arg(long, value_name = "FILE", conflicts_with_all = [
        "credit_card", "name_surname", "id_card", "phone_number",
        "room_type", "arrival_date", "num_days",
    ])]
    pub from_json: Option<PathBuf>,

    /// 16-digit card number.
    #[arg(long, required_unless_present = "from_json")]
    pub credit_card: Option<String>,

    /// Full name, at least two words.
    #[arg(long, required_unless_present = "from_json")]
    pub name_surname: Option<String>,

    /// 8 digits and a check letter.
    #[arg(long, required_unless_present = "from_json")]
    pub id_card: Option<String>,

    /// 9-digit phone number.
    #[arg(long, required_unless_present = "from_json")]
    pub phone_number: Option<String>,

    /// single, double, or suite.
    #[arg(long, required_unless_present = "from_json")]
    pub room_type: Option<String>,

    /// Arrival day, DD/MM/YYYY.
    #[arg(long, required_unless_present = "from_json")]
    pub arrival_date: Option<String>,

    /// Nights to stay, 1 to 10.
    #[arg(long, required_unless_present = "from_json", allow_negative_numbers = true)]
    pub num_days: Option<i64>,
}

impl ReserveArgs {
    fn request(&self) -> Result<ReservationRequest> {
        fn flag<T: Clone>(value: &Option<T>, name: &str) -> Result<T> {
            value.clone().with_context(|| format!("--{name} is required"))
        }
        Ok(ReservationRequest {
            credit_card: flag(&self.credit_card, "credit-card")?,
            name_surname: flag(&self.name_surname, "name-surname")?,
            id_card: flag(&self.id_card, "id-card")?,
            phone_number: flag(&self.phone_number, "phone-number")?,
            room_type: flag(&self.room_type, "room-type")?,
            arrival_date: flag(&self.arrival_date, "arrival-date")?,
            num_days: flag(&self.num_days, "num-days")?,
        })
    }
}

/// Execute the reserve subcommand. Returns the localizer.
pub fn run_reserve<S: RecordStore, C: Clock>(
    args: &ReserveArgs,
    desk: &FrontDesk<S, C>,
) -> Result<String> {
    let localizer = match &args.from_json {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON document", path.display()))?;
            desk.reserve_json(&value)?
        }
        None => desk.reserve(&args.request()?)?,
    };
    Ok(localizer.to_string())
}
