//! Error types for truckload

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid item record: {0}")]
    Format(String),

    #[error("Invalid dimensions \"{value}\" for item {item}: expected three 'x'-separated integers")]
    InvalidDimensions { item: String, value: String },

    #[error("Unknown vehicle ID: {0}")]
    UnknownVehicle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
