//! Item records to be loaded onto a truck

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One unit to be loaded, as read from the items file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub item: String,
    /// Weight in kg
    pub weight: f64,
    /// Dimensions as "WxHxD" in integer units
    pub dimensions: String,
    /// Action label (e.g. "load"); recorded in the ledger but not interpreted
    pub action: String,
}

/// Parsed physical dimensions of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Dimensions {
    /// Volume in cubic units, or `None` if the product overflows `u64`
    pub fn volume(&self) -> Option<u64> {
        (self.width as u64)
            .checked_mul(self.height as u64)?
            .checked_mul(self.depth as u64)
    }
}

#[derive(Debug, Error)]
#[error("expected three 'x'-separated integers, got \"{0}\"")]
pub struct ParseDimensionsError(String);

impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('x').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseDimensionsError(s.to_string()));
        }

        let mut sides = [0u32; 3];
        for (side, part) in sides.iter_mut().zip(&parts) {
            *side = part
                .parse()
                .map_err(|_| ParseDimensionsError(s.to_string()))?;
        }

        Ok(Dimensions {
            width: sides[0],
            height: sides[1],
            depth: sides[2],
        })
    }
}
