pub mod json;

// Re-export commonly used functions
pub use json::{read_dataset, read_raw_records, write_dataset, write_dataset_atomic};
