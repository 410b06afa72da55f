//! Error types for wheelpicker
//!
//! Rendering and interaction never fail. Errors only come from:
//! - `PickerError` when building a picker from a configuration object
//! - `ConfigError` when loading the configuration file
//! - `WheelError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for wheelpicker
#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while assembling a picker
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("A picker needs at least one column")]
    NoColumns,

    #[error("A picker supports at most 3 columns, got {0}")]
    TooManyColumns(usize),

    #[error("{separators} separators given for {gaps} column gaps")]
    TooManySeparators { gaps: usize, separators: usize },
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type alias for WheelError
pub type Result<T> = std::result::Result<T, WheelError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;
