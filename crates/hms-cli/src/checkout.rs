//! # Checkout Subcommand

use anyhow::Result;
use clap::Args;
use hms_core::{ArrivalDate, Clock};
use hms_desk::FrontDesk;
use hms_store::RecordStore;

/// Arguments for the `hms checkout` subcommand.
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Room key printed by `hms arrive`.
    #[arg(value_name = "ROOM_KEY")]
    pub room_key: String,
}

/// Execute the checkout subcommand. Returns a one-line summary.
pub fn run_checkout<S: RecordStore, C: Clock>(
    args: &CheckoutArgs,
    desk: &FrontDesk<S, C>,
) -> Result<String> {
    let record = desk.checkout(&args.room_key)?;
    Ok(format!(
        "{} checked out on {}",
        record.room_key,
        ArrivalDate::from_date(record.departure_date)
    ))
}
