//! Domain services

mod load_simulator;

pub use load_simulator::{simulate_loading, LedgerEntry, LoadingRun, RunOutcome};
