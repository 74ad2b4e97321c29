//! Status timelines, aggregation and dataset production for Spectrum

pub mod formats;
pub mod generator;
pub mod history;
pub mod import;
pub mod query;
pub mod resolver;
pub mod stats;
pub mod store;
pub mod validation;
pub mod views;

// Re-export commonly used functions
pub use formats::{read_dataset, read_raw_records, write_dataset_atomic};
pub use generator::{generate_dataset, generate_history, generate_species};
pub use history::fill_gaps;
pub use import::{normalize, normalize_with, transform_file, NormalizeOptions, RawSpecies};
pub use query::{distinct_categories, filter_by_status, find_species, species_in_year};
pub use resolver::resolve_status;
pub use stats::{all_category_stats, category_stats, current_status_counts, CategoryStats, StatusCounts};
pub use store::{DatasetSource, DatasetStore, FileSource};
pub use validation::{check_dataset, Violation};
pub use views::{chart_series, map_markers, ChartEntry, MapMarker};
