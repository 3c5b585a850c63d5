//! # Status Subcommand

use anyhow::Result;
use clap::Args;
use hms_core::Clock;
use hms_desk::FrontDesk;
use hms_store::RecordStore;

/// Arguments for the `hms status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Id card to look up.
    #[arg(value_name = "ID_CARD")]
    pub id_card: String,
}

/// Execute the status subcommand. Returns the booking state name.
pub fn run_status<S: RecordStore, C: Clock>(
    args: &StatusArgs,
    desk: &FrontDesk<S, C>,
) -> Result<String> {
    Ok(desk.booking_state(&args.id_card)?.to_string())
}
