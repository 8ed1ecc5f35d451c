//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::constants::{DEFAULT_OUTPUT_PATH, VEHICLE_SPECS};
use crate::domain::model::{OverrideProvider, SpecTableProvider};
use crate::domain::service::{simulate_loading, RunOutcome};
use crate::error::Result;
use crate::export::render_progress_image;
use crate::infrastructure::load_items;
use crate::output::print_run;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Run {
            items,
            output,
            vehicle,
            max_weight,
            max_volume,
        } => cmd_run(
            &cli,
            &config,
            items.clone(),
            output.clone(),
            vehicle.clone(),
            *max_weight,
            *max_volume,
            output_format,
        ),

        Commands::Vehicles => cmd_vehicles(output_format),

        Commands::Config {
            show,
            set_vehicle,
            set_output,
            set_format,
            reset,
        } => cmd_config(
            *show,
            set_vehicle.clone(),
            set_output.clone(),
            *set_format,
            *reset,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    cli: &Cli,
    config: &Config,
    items_path: PathBuf,
    output: Option<PathBuf>,
    vehicle: Option<String>,
    max_weight: Option<f64>,
    max_volume: Option<u64>,
    output_format: OutputFormat,
) -> Result<()> {
    let vehicle_id = vehicle.unwrap_or_else(|| config.vehicle_id.clone());
    let output_path = output
        .or_else(|| config.output_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

    let items = load_items(&items_path)?;
    if cli.verbose {
        eprintln!("Loaded {} item(s) from {}", items.len(), items_path.display());
    }

    // Limit precedence: CLI flags over config over the spec table
    let provider = OverrideProvider {
        inner: SpecTableProvider,
        max_weight: max_weight.or(config.max_weight),
        max_volume: max_volume.or(config.max_volume),
    };

    let run = simulate_loading(&vehicle_id, &provider, &items)?;

    if let RunOutcome::HaltedAtCapacity { step, item } = &run.outcome {
        println!("Step {}: Cannot load item {}. Exceeds truck capacity.", step, item);
    }

    print_run(output_format, &run)?;

    render_progress_image(&run, &output_path)?;
    println!("Comprehensive progress image saved at {}", output_path.display());

    Ok(())
}

fn cmd_vehicles(output_format: OutputFormat) -> Result<()> {
    // BTreeMap for stable ID order
    let specs: BTreeMap<_, _> = VEHICLE_SPECS.iter().collect();

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&specs)?;
        println!("{}", content);
        return Ok(());
    }

    println!("Registered vehicles");
    println!("===================");
    for (id, spec) in specs {
        println!(
            "{:<8} {:<24} max weight {:>7} kg, max volume {:>7} cu units",
            id, spec.name, spec.max_weight, spec.max_volume
        );
    }

    Ok(())
}

fn cmd_config(
    show: bool,
    set_vehicle: Option<String>,
    set_output: Option<PathBuf>,
    set_format: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(vehicle_id) = set_vehicle {
        config.vehicle_id = vehicle_id;
        changed = true;
    }
    if let Some(path) = set_output {
        config.output_path = Some(path);
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
