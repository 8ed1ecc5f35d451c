//! Loading simulation service
//!
//! Walks an ordered item sequence against a vehicle capacity profile,
//! admitting items greedily until the first one whose admission would exceed
//! either the weight or the volume limit. The rejection halts the run: items
//! after it are never examined, even ones that would fit on their own.

use crate::domain::model::{CapacityProfile, CapacityProvider, Dimensions, Item};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted item with running totals at that step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// 1-based step number
    pub step: u32,
    /// Item identifier
    pub item: String,
    /// Item weight in kg
    pub weight: f64,
    /// Item volume in cubic units
    pub volume: u64,
    /// Cumulative weight after this item
    pub current_weight: f64,
    /// Cumulative volume after this item
    pub current_volume: u64,
    /// Fill percentages, two decimals per axis
    pub filled_capacity: String,
    /// Action label carried over from the item record
    pub action: String,
}

/// How a loading run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    /// All items were admitted
    Completed,
    /// An item would have exceeded capacity; nothing after it was examined
    HaltedAtCapacity { step: u32, item: String },
}

/// Result of one loading simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingRun {
    /// Vehicle the items were loaded onto
    pub vehicle_id: String,
    /// Capacity limits consulted during the run
    pub profile: CapacityProfile,
    /// Accepted items in processing order; always a prefix of the input
    pub ledger: Vec<LedgerEntry>,
    /// Final cumulative weight in kg
    pub current_weight: f64,
    /// Final cumulative volume in cubic units
    pub current_volume: u64,
    /// How the run ended
    pub outcome: RunOutcome,
    /// When the simulation ran
    pub generated_at: DateTime<Utc>,
}

impl LoadingRun {
    /// Weight fill percentage of the final state
    pub fn weight_fill_percent(&self) -> f64 {
        (self.current_weight / self.profile.max_weight) * 100.0
    }

    /// Volume fill percentage of the final state
    pub fn volume_fill_percent(&self) -> f64 {
        (self.current_volume as f64 / self.profile.max_volume as f64) * 100.0
    }
}

fn filled_capacity_label(weight_pct: f64, volume_pct: f64) -> String {
    format!("{:.2}% Weight, {:.2}% Volume", weight_pct, volume_pct)
}

/// Simulate loading `items` onto the vehicle, in order.
///
/// The capacity profile is resolved through `provider`; an unregistered
/// vehicle ID fails with [`Error::UnknownVehicle`]. Each item's dimensions
/// string is parsed before the admission test, so a malformed record aborts
/// the whole run with [`Error::InvalidDimensions`] - unless it sits after
/// the halt point, where it is never examined.
///
/// Admission is strict-greater-than on both axes: an item that lands exactly
/// on a limit is still admitted. Volume arithmetic is checked, so an item or
/// cumulative volume beyond `u64` counts as over capacity rather than
/// wrapping. The rejected item contributes nothing to the totals or the
/// ledger.
pub fn simulate_loading(
    vehicle_id: &str,
    provider: &dyn CapacityProvider,
    items: &[Item],
) -> Result<LoadingRun> {
    let profile = provider
        .profile(vehicle_id)
        .ok_or_else(|| Error::UnknownVehicle(vehicle_id.to_string()))?;

    let mut ledger = Vec::new();
    let mut current_weight = 0.0;
    let mut current_volume = 0u64;
    let mut step = 1u32;
    let mut outcome = RunOutcome::Completed;

    for item in items {
        let dims: Dimensions =
            item.dimensions
                .parse()
                .map_err(|_| Error::InvalidDimensions {
                    item: item.item.clone(),
                    value: item.dimensions.clone(),
                })?;
        let new_weight = current_weight + item.weight;
        // An item or cumulative volume that overflows u64 is strictly over
        // any representable limit, so it fails the admission test like any
        // other oversized item.
        let new_volume = match dims.volume().and_then(|v| current_volume.checked_add(v)) {
            Some(v) if new_weight <= profile.max_weight && v <= profile.max_volume => v,
            _ => {
                outcome = RunOutcome::HaltedAtCapacity {
                    step,
                    item: item.item.clone(),
                };
                break;
            }
        };
        let volume = new_volume - current_volume;

        current_weight = new_weight;
        current_volume = new_volume;

        let weight_pct = (current_weight / profile.max_weight) * 100.0;
        let volume_pct = (current_volume as f64 / profile.max_volume as f64) * 100.0;

        ledger.push(LedgerEntry {
            step,
            item: item.item.clone(),
            weight: item.weight,
            volume,
            current_weight,
            current_volume,
            filled_capacity: filled_capacity_label(weight_pct, volume_pct),
            action: item.action.clone(),
        });

        step += 1;
    }

    Ok(LoadingRun {
        vehicle_id: vehicle_id.to_string(),
        profile,
        ledger,
        current_weight,
        current_volume,
        outcome,
        generated_at: Utc::now(),
    })
}
