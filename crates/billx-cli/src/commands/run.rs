//! Run command - unpack an archive and process every PDF in it.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;

use billx_core::{pipeline, TracingSink};

use super::config::load_config;
use super::print_batch_summary;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Zip archive with PDF invoices (default from config)
    #[arg(short, long)]
    archive: Option<PathBuf>,

    /// Directory to unpack the archive into (default from config)
    #[arg(short, long)]
    extract_dir: Option<PathBuf>,

    /// Output CSV file (default from config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let archive = args.archive.unwrap_or(config.input.archive_path);
    let extract_dir = args.extract_dir.unwrap_or(config.input.extract_dir);
    let output = args.output.unwrap_or(config.output.csv_path);

    let summary = pipeline::run(&archive, &extract_dir, &output, &mut TracingSink)?;

    println!(
        "{} Unpacked {} files from {}",
        style("ℹ").blue(),
        summary.files_unpacked,
        archive.display()
    );
    print_batch_summary(&summary.batch, &output);
    println!("   finished in {:?}", start.elapsed());

    Ok(())
}
