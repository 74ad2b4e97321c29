//! Core types shared across all Spectrum modules
pub mod category;
pub mod dataset;
pub mod species;
pub mod status;

// Re-export commonly used types at module level
pub use category::Category;
pub use dataset::{history_year_range, Dataset, DatasetMetadata, YearRange, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
pub use species::{AssessmentRecord, Location, PopulationTrend, Species, Threat};
pub use status::{status_color, StatusCode, StatusStyle, STATUS_PALETTE};
