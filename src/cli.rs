//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for run summaries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "truckload")]
#[command(version)]
#[command(about = "Truck loading simulation with capacity tracking and progress image export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate loading items onto a truck and export the progress image
    Run {
        /// Path to items file (JSON array, or CSV with a header row)
        items: PathBuf,

        /// Output image path. Uses config value if not specified.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Vehicle ID selecting the capacity profile. Uses config value if not specified.
        #[arg(long)]
        vehicle: Option<String>,

        /// Override the profile's maximum weight (kg)
        #[arg(long)]
        max_weight: Option<f64>,

        /// Override the profile's maximum volume (cubic units)
        #[arg(long)]
        max_volume: Option<u64>,
    },

    /// List registered vehicle capacity profiles
    Vehicles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default vehicle ID
        #[arg(long)]
        set_vehicle: Option<String>,

        /// Set default output image path
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
