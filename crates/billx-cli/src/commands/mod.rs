pub mod config;
pub mod fields;
pub mod run;
pub mod scan;

use billx_core::BatchSummary;
use console::style;

/// Print the counters of a batch run.
pub(crate) fn print_batch_summary(summary: &BatchSummary, output: &std::path::Path) {
    println!(
        "{} Wrote {} records to {}",
        style("✓").green(),
        summary.records_written,
        output.display()
    );
    println!(
        "   {} PDF files, {} skipped, {} pages without text",
        style(summary.pdfs_found).green(),
        style(summary.pdfs_failed).red(),
        style(summary.pages_skipped).yellow()
    );
}
