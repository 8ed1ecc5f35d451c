//! Console output for loading runs

use crate::cli::OutputFormat;
use crate::domain::service::{LoadingRun, RunOutcome};
use crate::error::Result;

/// Print the run summary in the selected format
pub fn print_run(output_format: OutputFormat, run: &LoadingRun) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(run)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format
    println!("\nLoading Summary");
    println!("===============");
    println!("Truck ID:        {}", run.vehicle_id);
    println!("Max weight:      {} kg", run.profile.max_weight);
    println!("Max volume:      {} cu units", run.profile.max_volume);
    println!("Items loaded:    {}", run.ledger.len());
    println!(
        "Current weight:  {} kg ({:.2}%)",
        run.current_weight,
        run.weight_fill_percent()
    );
    println!(
        "Current volume:  {} cu units ({:.2}%)",
        run.current_volume,
        run.volume_fill_percent()
    );
    match &run.outcome {
        RunOutcome::Completed => println!("Outcome:         all items loaded"),
        RunOutcome::HaltedAtCapacity { step, item } => {
            println!("Outcome:         halted at step {} (item {})", step, item)
        }
    }

    if !run.ledger.is_empty() {
        println!();
        println!(
            "{:<5} {:<12} {:>8} {:>8} {:>10} {:>10}  {:<30} {:<8}",
            "Step", "Item", "Weight", "Volume", "Cur. Wt", "Cur. Vol", "Filled Capacity", "Action"
        );
        println!("{}", "-".repeat(100));
        for entry in &run.ledger {
            println!(
                "{:<5} {:<12} {:>8} {:>8} {:>10} {:>10}  {:<30} {:<8}",
                entry.step,
                entry.item,
                entry.weight,
                entry.volume,
                entry.current_weight,
                entry.current_volume,
                entry.filled_capacity,
                entry.action
            );
        }
    }

    Ok(())
}
