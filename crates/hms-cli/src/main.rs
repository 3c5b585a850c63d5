//! # hms CLI entry point
//!
//! Parses command-line arguments, installs logging, and dispatches to the
//! subcommand handlers. Each handler returns the line to print on success.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hms_cli::arrival::{run_arrive, run_request, ArriveArgs, RequestArgs};
use hms_cli::checkout::{run_checkout, CheckoutArgs};
use hms_cli::reserve::{run_reserve, ReserveArgs};
use hms_cli::status::{run_status, StatusArgs};
use hms_cli::{load_config, open_desk};
use hms_desk::DeskError;

/// Hotel front desk: reservations, check-in, and checkout.
#[derive(Parser, Debug)]
#[command(name = "hms", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record store root directory. Overrides the configuration.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate and store a reservation; prints the localizer.
    Reserve(ReserveArgs),

    /// Write a stay request; prints its reference.
    Request(RequestArgs),

    /// Check a guest in from a stay request; prints the room key.
    Arrive(ArriveArgs),

    /// Check a guest out by room key.
    Checkout(CheckoutArgs),

    /// Print the booking state for an id card.
    Status(StatusArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("hms CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = load_config(cli.config.as_deref(), cli.store.as_deref()).and_then(|cfg| {
        let desk = open_desk(&cfg);
        match &cli.command {
            Commands::Reserve(args) => run_reserve(args, &desk),
            Commands::Request(args) => run_request(args, &desk),
            Commands::Arrive(args) => run_arrive(args, &desk),
            Commands::Checkout(args) => run_checkout(args, &desk),
            Commands::Status(args) => run_status(args, &desk),
        }
    });

    match result {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            // Refusals exit 1; store and configuration failures exit 2.
            match e.downcast_ref::<DeskError>() {
                Some(DeskError::Store(_)) | None => ExitCode::from(2),
                Some(_) => ExitCode::from(1),
            }
        }
    }
}
