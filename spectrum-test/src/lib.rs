//! Test utilities for the Spectrum workspace
//!
//! Shared fixtures, isolated environments and dataset assertions used by the
//! unit and integration tests of every Spectrum crate.

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use environment::{TestConfig, TestEnvironment};
pub use fixtures::{dataset_of, seeded_rng, SpeciesBuilder};

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
