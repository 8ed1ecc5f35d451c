//! Application constants

mod vehicle_specs;

pub use vehicle_specs::{get_vehicle_spec, VEHICLE_SPECS};

/// Vehicle consulted when neither the CLI nor the config selects one
pub const DEFAULT_VEHICLE_ID: &str = "325101";

/// Default path for the rendered progress image
pub const DEFAULT_OUTPUT_PATH: &str = "truck_progress_overview.png";
