use crate::cli::formatting::print_dataset_summary;
use crate::cli::output::*;
use crate::cli::progress::create_spinner;
use anyhow::Context;
use clap::Args;
use spectrum_core::{dataset_path, Config};
use spectrum_data::{transform_file, NormalizeOptions};
use std::path::PathBuf;

#[derive(Args)]
pub struct TransformArgs {
    /// Legacy JSON export to normalize (default: $SPECTRUM_DATA_DIR/<data.dataset_file>)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Where to write the canonical dataset (default: overwrite the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fill missing years inside each species' history with the previous status
    #[arg(long)]
    pub fill_gaps: bool,

    /// Do not print the summary table
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: TransformArgs, config: &Config) -> anyhow::Result<()> {
    let input = args
        .input
        .unwrap_or_else(|| dataset_path(&config.data.dataset_file));
    let output = args.output.unwrap_or_else(|| input.clone());

    let options = NormalizeOptions {
        fill_gaps: args.fill_gaps,
        fallback_range: config.year_range()?,
    };

    info(&format!("Reading legacy data from {}", input.display()));
    let spinner = create_spinner("Normalizing species records...");
    let result = transform_file(&input, &output, &options)
        .with_context(|| format!("Failed to transform {}", input.display()));
    spinner.finish_and_clear();
    let dataset = result?;

    success(&format!(
        "Transformed {} species to {}",
        format_number(dataset.len()),
        output.display()
    ));
    if !args.quiet {
        print_dataset_summary(&dataset);
    }
    Ok(())
}
