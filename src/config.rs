// Configuration module for off-estimator
// This module handles loading and parsing configuration from ~/.config/off-estimator/config.toml

mod types;

pub use types::{Config, EstimateConfig, LogConfig, LogLevel};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/off-estimator/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
///
/// A missing file yields defaults silently. A file that cannot be read or
/// parsed yields defaults plus a warning for the caller to report.
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config {}: {}", config_path.display(), e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config {}: {}", config_path.display(), e)),
        },
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/off-estimator/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("off-estimator")
        .join("config.toml")
}
