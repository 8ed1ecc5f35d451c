//! Configuration management for truckload
//!
//! Config stored at: ~/.config/truckload/config.json

use crate::cli::OutputFormat;
use crate::constants::DEFAULT_VEHICLE_ID;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle ID selecting the capacity profile
    #[serde(default = "default_vehicle_id")]
    pub vehicle_id: String,

    /// Output image path override (optional)
    #[serde(default)]
    pub output_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum weight override in kg (optional)
    #[serde(default)]
    pub max_weight: Option<f64>,

    /// Maximum volume override in cubic units (optional)
    #[serde(default)]
    pub max_volume: Option<u64>,
}

fn default_vehicle_id() -> String {
    DEFAULT_VEHICLE_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vehicle_id: default_vehicle_id(),
            output_path: None,
            output_format: OutputFormat::default(),
            max_weight: None,
            max_volume: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truckload");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Truckload Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Vehicle ID:     {}", self.vehicle_id)?;
        writeln!(
            f,
            "Output path:    {}",
            self.output_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(default)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Max weight:     {}",
            self.max_weight
                .map(|w| format!("{} kg", w))
                .unwrap_or_else(|| "(from profile)".to_string())
        )?;
        writeln!(
            f,
            "Max volume:     {}",
            self.max_volume
                .map(|v| format!("{} cu units", v))
                .unwrap_or_else(|| "(from profile)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
