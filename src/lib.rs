//! Truckload Library
//!
//! Greedy, order-preserving truck loading simulation: items are admitted in
//! input order until the first one whose admission would exceed the vehicle's
//! capacity profile, then the run halts. The accepted-items ledger is
//! rendered as a single progress image.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod output;
