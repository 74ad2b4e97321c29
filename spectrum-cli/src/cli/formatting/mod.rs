// Formatting and display functionality
pub mod stats_display;

pub use stats_display::{print_dataset_summary, summary_table};
