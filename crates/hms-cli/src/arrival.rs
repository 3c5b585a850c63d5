//! # Request and Arrive Subcommands
//!
//! `hms request` writes the stay request a guest presents at the desk;
//! `hms arrive` checks the guest in from it.

use anyhow::Result;
use clap::Args;
use hms_core::Clock;
use hms_desk::FrontDesk;
use hms_store::RecordStore;

/// Arguments for the `hms request` subcommand.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Id card the reservation was made with.
    #[arg(long)]
    pub id_card: String,

    /// Localizer returned by `hms reserve`.
    #[arg(long)]
    pub localizer: String,
}

/// Arguments for the `hms arrive` subcommand.
#[derive(Args, Debug)]
pub struct ArriveArgs {
    /// Stay request reference, as printed by `hms request`.
    #[arg(value_name = "REQUEST.json")]
    pub request: String,
}

/// Execute the request subcommand. Returns the stay request reference.
pub fn run_request<S: RecordStore, C: Clock>(
    args: &RequestArgs,
    desk: &FrontDesk<S, C>,
) -> Result<String> {
    Ok(desk.submit_stay_request(&args.id_card, &args.localizer)?)
}

/// Execute the arrive subcommand. Returns the room key.
pub fn run_arrive<S: RecordStore, C: Clock>(
    args: &ArriveArgs,
    desk: &FrontDesk<S, C>,
) -> Result<String> {
    Ok(desk.arrival(&args.request)?.to_string())
}
