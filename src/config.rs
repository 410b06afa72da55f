//! Configuration file support for wheelpicker.
//!
//! Configuration is loaded from `~/.config/wheelpicker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheelpicker/config.toml
//! height = 9
//! label_inset = 2
//! cyclic = true
//! columns = 3
//! separator = ":"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, ConfigError};
use crate::tui::components::{DEFAULT_HEIGHT, DEFAULT_LABEL_INSET};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Shared picker height in rows
    pub height: Option<u16>,

    /// Rows reserved around the wheel area
    pub label_inset: Option<u16>,

    /// Whether columns wrap around at either end
    pub cyclic: Option<bool>,

    /// Number of columns shown by the demo (1-3)
    pub columns: Option<usize>,

    /// Separator text placed between columns
    pub separator: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load an explicitly requested file, or the default path when none is given.
    ///
    /// Unlike [`Config::load`], a requested file that cannot be read or
    /// parsed is an error.
    pub fn resolve(path: Option<&Path>) -> error::Result<Self> {
        match path {
            Some(path) => Ok(Self::load_from(path)?),
            None => Ok(Self::load()),
        }
    }

    /// Load configuration from `path`, warning and falling back to defaults on failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                crate::log::log(&format!("Config fallback to defaults: {}", e));
                Self::default()
            }
        }
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wheelpicker")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, height: Option<u16>, columns: Option<usize>) -> Self {
        if height.is_some() {
            self.height = height;
        }
        if columns.is_some() {
            self.columns = columns;
        }
        self
    }

    pub fn height(&self) -> u16 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn label_inset(&self) -> u16 {
        self.label_inset.unwrap_or(DEFAULT_LABEL_INSET)
    }

    pub fn cyclic(&self) -> bool {
        self.cyclic.unwrap_or(false)
    }

    /// Column count, clamped to 1-3.
    pub fn columns(&self) -> usize {
        self.columns.unwrap_or(3).clamp(1, 3)
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(":")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.height(), DEFAULT_HEIGHT);
        assert_eq!(config.label_inset(), DEFAULT_LABEL_INSET);
        assert!(!config.cyclic());
        assert_eq!(config.columns(), 3);
        assert_eq!(config.separator(), ":");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            height = 11
            label_inset = 0
            cyclic = true
            columns = 2
            separator = "-"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.height(), 11);
        assert_eq!(config.label_inset(), 0);
        assert!(config.cyclic());
        assert_eq!(config.columns(), 2);
        assert_eq!(config.separator(), "-");
    }

    #[test]
    fn test_overrides_and_clamping() {
        let config = Config {
            height: Some(5),
            columns: Some(9),
            ..Config::default()
        };
        assert_eq!(config.columns(), 3);

        let config = config.with_overrides(None, Some(1));
        assert_eq!(config.height(), 5);
        assert_eq!(config.columns(), 1);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = std::env::temp_dir().join(format!(
            "wheelpicker_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "height = \"tall\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_resolve_requested_file() {
        let path = std::env::temp_dir().join(format!(
            "wheelpicker_resolve_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "columns = 2").unwrap();
        assert_eq!(Config::resolve(Some(path.as_path())).unwrap().columns(), 2);
        std::fs::remove_file(&path).unwrap();

        let missing = std::env::temp_dir().join("wheelpicker_resolve_missing.toml");
        assert!(matches!(
            Config::resolve(Some(missing.as_path())),
            Err(crate::error::WheelError::Config(ConfigError::Read { .. }))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("wheelpicker_config_does_not_exist.toml");
        assert_eq!(Config::load_or_default(&path), Config::default());
    }
}
