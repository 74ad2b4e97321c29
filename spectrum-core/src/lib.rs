//! Core types shared across all Spectrum crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config};
pub use error::{SpectrumError, SpectrumResult};

// Re-export core types
pub use types::{
    history_year_range, status_color, AssessmentRecord, Category, Dataset, DatasetMetadata,
    Location, PopulationTrend, Species, StatusCode, StatusStyle, Threat, YearRange,
    STATUS_PALETTE,
};

// Re-export system utilities
pub use system::{dataset_path, spectrum_config_path, spectrum_data_dir, spectrum_home, utc_now};
