//! System-level utilities for Spectrum
pub mod paths;

pub use paths::{dataset_path, spectrum_config_path, spectrum_data_dir, spectrum_home};

/// Current UTC time, used to stamp dataset metadata
pub fn utc_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
