// Configuration type definitions

use serde::Deserialize;

use crate::projection::DEFAULT_IMAGE_LANGUAGE;
use crate::stats::DEFAULT_PROGRESS_INTERVAL;

/// Log verbosity selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Step up `steps` levels, saturating at `Trace`
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 6] = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let index = ORDER.iter().position(|level| *level == self).unwrap_or(0);
        ORDER[(index + steps as usize).min(ORDER.len() - 1)]
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Estimation configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateConfig {
    /// Records to process; 0 reads the whole stream
    #[serde(default)]
    pub sample: u64,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
    #[serde(default = "default_image_language")]
    pub image_language: String,
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

fn default_image_language() -> String {
    DEFAULT_IMAGE_LANGUAGE.to_string()
}

impl Default for EstimateConfig {
    fn default() -> Self {
        EstimateConfig {
            sample: 0,
            progress_interval: default_progress_interval(),
            image_language: default_image_language(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub estimate: EstimateConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
