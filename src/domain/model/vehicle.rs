//! Vehicle capacity types and profile lookup

use serde::{Deserialize, Serialize};

/// Registered vehicle specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSpec {
    /// Display name
    pub name: String,
    /// Maximum payload weight in kg
    pub max_weight: f64,
    /// Maximum cargo volume in cubic units
    pub max_volume: u64,
}

impl VehicleSpec {
    /// Capacity limits of this vehicle
    pub fn profile(&self) -> CapacityProfile {
        CapacityProfile {
            max_weight: self.max_weight,
            max_volume: self.max_volume,
        }
    }
}

/// The capacity limits consulted during a loading run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityProfile {
    /// Maximum payload weight in kg
    pub max_weight: f64,
    /// Maximum cargo volume in cubic units
    pub max_volume: u64,
}

/// Source of capacity profiles, keyed by vehicle ID
pub trait CapacityProvider {
    /// Look up the capacity profile for a vehicle, if registered
    fn profile(&self, vehicle_id: &str) -> Option<CapacityProfile>;
}

/// Provider backed by the built-in vehicle spec table
pub struct SpecTableProvider;

impl CapacityProvider for SpecTableProvider {
    fn profile(&self, vehicle_id: &str) -> Option<CapacityProfile> {
        crate::constants::get_vehicle_spec(vehicle_id).map(VehicleSpec::profile)
    }
}

/// Provider applying explicit limit overrides on top of another provider
pub struct OverrideProvider<P> {
    pub inner: P,
    pub max_weight: Option<f64>,
    pub max_volume: Option<u64>,
}

impl<P: CapacityProvider> CapacityProvider for OverrideProvider<P> {
    fn profile(&self, vehicle_id: &str) -> Option<CapacityProfile> {
        let mut profile = self.inner.profile(vehicle_id)?;
        if let Some(max_weight) = self.max_weight {
            profile.max_weight = max_weight;
        }
        if let Some(max_volume) = self.max_volume {
            profile.max_volume = max_volume;
        }
        Some(profile)
    }
}
