//! End-to-end run: unpack the archive, then scan the extracted tree.

use std::path::Path;

use tracing::info;

use crate::archive::unpack;
use crate::batch::{BatchProcessor, BatchSummary};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::output::CsvRecordWriter;

/// Counters for a full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files written by the unpacker.
    pub files_unpacked: usize,
    /// Batch counters.
    pub batch: BatchSummary,
}

/// Unpack `archive_path` into `extract_dir` and write one CSV row per page to
/// `csv_path`.
///
/// Archive failures are reported and the scan still runs over whatever was
/// extracted. Only failing to create or write the CSV is an error.
pub fn run(
    archive_path: &Path,
    extract_dir: &Path,
    csv_path: &Path,
    sink: &mut impl DiagnosticSink,
) -> Result<RunSummary> {
    let files_unpacked = unpack(archive_path, extract_dir, sink);
    info!("Unpacked {} files into {}", files_unpacked, extract_dir.display());

    let batch = scan(extract_dir, csv_path, sink)?;

    Ok(RunSummary {
        files_unpacked,
        batch,
    })
}

/// Write one CSV row per page for every PDF below `root`.
pub fn scan(root: &Path, csv_path: &Path, sink: &mut impl DiagnosticSink) -> Result<BatchSummary> {
    let mut writer = CsvRecordWriter::create(csv_path)?;
    let summary = BatchProcessor::new().process_tree(root, &mut writer, sink)?;
    writer.finish()?;

    info!(
        "Wrote {} records to {}",
        summary.records_written,
        csv_path.display()
    );
    Ok(summary)
}
