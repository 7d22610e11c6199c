//! Scan command - process PDFs in an existing directory tree.

use std::path::PathBuf;

use clap::Args;

use billx_core::{pipeline, TracingSink};

use super::config::load_config;
use super::print_batch_summary;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Directory searched recursively for PDF files
    #[arg(required = true)]
    input: PathBuf,

    /// Output CSV file (default from config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let output = match args.output {
        Some(output) => output,
        None => load_config(config_path)?.output.csv_path,
    };

    let summary = pipeline::scan(&args.input, &output, &mut TracingSink)?;
    print_batch_summary(&summary, &output);

    Ok(())
}
