//! Configuration types for Spectrum

use crate::types::{YearRange, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use crate::SpectrumError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of synthetic species in the demo dataset
    #[serde(default = "default_species_count")]
    pub species_count: usize,
    /// Fixed seed for reproducible datasets (entropy when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Dataset file name, resolved against the data directory when relative
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,
}

// Default value functions
fn default_min_year() -> i32 { DEFAULT_MIN_YEAR }
fn default_max_year() -> i32 { DEFAULT_MAX_YEAR }
fn default_species_count() -> usize { 100 }
fn default_dataset_file() -> String { "species_data.json".to_string() }

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            species_count: default_species_count(),
            seed: None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_file: default_dataset_file(),
        }
    }
}

impl Config {
    /// Supported year range, validated
    pub fn year_range(&self) -> Result<YearRange, SpectrumError> {
        YearRange::new(self.timeline.min_year, self.timeline.max_year).map_err(|_| {
            SpectrumError::Configuration(format!(
                "timeline.min_year ({}) must not be after timeline.max_year ({})",
                self.timeline.min_year, self.timeline.max_year
            ))
        })
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SpectrumError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SpectrumError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SpectrumError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SpectrumError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
