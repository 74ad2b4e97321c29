pub mod commands;
pub mod config;
pub mod formatting;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spectrum",
    version,
    about = "IUCN Red List status timelines for demonstration and legacy datasets",
    long_about = "Spectrum produces species datasets with year-by-year IUCN conservation status \
                  histories, either by generating a reproducible synthetic dataset or by \
                  normalizing a legacy export into the canonical format."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $SPECTRUM_CONFIG, then $SPECTRUM_HOME/config.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the synthetic demonstration dataset
    Generate(commands::generate::GenerateArgs),

    /// Normalize a legacy species export into the canonical dataset
    Transform(commands::transform::TransformArgs),
}
