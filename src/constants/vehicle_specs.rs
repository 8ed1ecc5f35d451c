//! Capacity profiles for registered trucks

use crate::domain::model::VehicleSpec;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Registered vehicle specifications, keyed by vehicle ID
pub static VEHICLE_SPECS: LazyLock<HashMap<&'static str, VehicleSpec>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "325101",
        VehicleSpec {
            name: "Standard box truck".to_string(),
            max_weight: 1000.0,
            max_volume: 20000,
        },
    );

    m.insert(
        "325102",
        VehicleSpec {
            name: "Long-bed box truck".to_string(),
            max_weight: 1500.0,
            max_volume: 32000,
        },
    );

    m.insert(
        "410007",
        VehicleSpec {
            name: "Light delivery van".to_string(),
            max_weight: 350.0,
            max_volume: 6500,
        },
    );

    m
});

/// Get the specification for a registered vehicle
pub fn get_vehicle_spec(vehicle_id: &str) -> Option<&'static VehicleSpec> {
    VEHICLE_SPECS.get(vehicle_id)
}
