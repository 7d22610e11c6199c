//! Core library for batch billing extraction.
//!
//! This crate provides:
//! - Zip archive unpacking
//! - PDF page text extraction
//! - Billing field extraction (cost center, contract, bill number, date,
//!   order number, total amount)
//! - CSV output with per-file and per-page error isolation

pub mod archive;
pub mod batch;
pub mod billing;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod output;
pub mod pdf;
pub mod pipeline;

pub use archive::{extract_archive, unpack, UnpackReport};
pub use batch::{find_pdfs, BatchProcessor, BatchSummary};
pub use billing::{extract_fields, FieldExtraction};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use error::{ArchiveError, BillxError, FieldError, FileReadError, PageError, PdfError, Result};
pub use models::{BillingFields, BillingRecord, BillxConfig};
pub use output::CsvRecordWriter;
pub use pdf::{PdfExtractor, PdfProcessor};
pub use pipeline::RunSummary;
