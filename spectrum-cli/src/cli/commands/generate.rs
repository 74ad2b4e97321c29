use crate::cli::formatting::print_dataset_summary;
use crate::cli::output::*;
use crate::cli::progress::create_spinner;
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spectrum_core::{dataset_path, Config, YearRange};
use spectrum_data::{check_dataset, generate_dataset, write_dataset_atomic};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output dataset file (default: $SPECTRUM_DATA_DIR/<data.dataset_file>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of species to generate (default: generator.species_count)
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible output (default: generator.seed, else random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// First year of every history (default: timeline.min_year)
    #[arg(long, value_name = "YEAR")]
    pub start_year: Option<i32>,

    /// Last year of every history (default: timeline.max_year)
    #[arg(long, value_name = "YEAR")]
    pub end_year: Option<i32>,

    /// Do not print the summary table
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let range = match (args.start_year, args.end_year) {
        (None, None) => config.year_range()?,
        (start, end) => YearRange::new(
            start.unwrap_or(config.timeline.min_year),
            end.unwrap_or(config.timeline.max_year),
        )?,
    };
    let count = args.count.unwrap_or(config.generator.species_count);
    let output = args
        .output
        .unwrap_or_else(|| dataset_path(&config.data.dataset_file));

    let mut rng = match args.seed.or(config.generator.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let spinner = create_spinner(format!("Generating {} species ({})...", count, range));
    let dataset = generate_dataset(count, range, &mut rng);

    let violations = check_dataset(&dataset, range);
    for violation in &violations {
        warn!("Generated dataset violates an invariant: {}", violation);
    }

    spinner.set_message(format!("Writing {}...", output.display()));
    let written = write_dataset_atomic(&output, &dataset)
        .with_context(|| format!("Failed to write dataset to {}", output.display()));
    spinner.finish_and_clear();
    written?;

    if !violations.is_empty() {
        warning(&format!("{} consistency problems in generated dataset", violations.len()));
    }

    success(&format!(
        "Generated {} species to {}",
        format_number(dataset.len()),
        output.display()
    ));
    if !args.quiet {
        print_dataset_summary(&dataset);
    }
    Ok(())
}
