use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use spectrum_core::SpectrumError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then SPECTRUM_LOG, then the -v count
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_level = std::env::var("SPECTRUM_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<SpectrumError>() {
            Some(SpectrumError::Configuration(_)) => 2,
            Some(SpectrumError::Io(_)) => 3,
            Some(SpectrumError::Parse(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => crate::cli::commands::generate::run(args, &config),
        Commands::Transform(args) => crate::cli::commands::transform::run(args, &config),
    }
}
