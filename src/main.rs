//! Truckload - truck loading simulation with capacity tracking
//!
//! A CLI tool that simulates loading items onto a truck in order, halting at
//! the first item that would exceed the capacity profile, and exports the
//! loading ledger as a progress image.

use clap::Parser;
use truckload::cli::Cli;
use truckload::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
