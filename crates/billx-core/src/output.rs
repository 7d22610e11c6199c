//! CSV output of billing records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::{BillxError, Result};
use crate::models::record::BillingRecord;

/// Column order of the output table.
pub const COLUMNS: [&str; 8] = [
    "path",
    "page_number",
    "cost_center",
    "contract_text",
    "bill_number",
    "billing_date",
    "order_number",
    "total_amount",
];

/// Writes one CSV row per record. The header is written on construction, so
/// a run without records still leaves a valid table behind.
pub struct CsvRecordWriter<W: Write> {
    writer: csv::Writer<W>,
    records_written: usize,
}

impl CsvRecordWriter<File> {
    /// Create (or truncate) a CSV file.
    pub fn create(path: &Path) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvRecordWriter<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(COLUMNS)?;
        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    /// Append one record.
    pub fn write_record(&mut self, record: &BillingRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| BillxError::Io(e.into_error()))
    }
}
