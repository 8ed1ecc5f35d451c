//! Domain model types

mod item;
mod vehicle;

pub use item::{Dimensions, Item, ParseDimensionsError};
pub use vehicle::{CapacityProfile, CapacityProvider, OverrideProvider, SpecTableProvider, VehicleSpec};
