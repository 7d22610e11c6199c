//! Batch processing of a directory tree of PDF invoices.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use tracing::{debug, info, warn};

use crate::billing::extract_fields;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{FileReadError, Result};
use crate::models::record::BillingRecord;
use crate::output::CsvRecordWriter;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// PDF files discovered under the root.
    pub pdfs_found: usize,
    /// PDF files skipped because they could not be opened.
    pub pdfs_failed: usize,
    /// Rows written to the output.
    pub records_written: usize,
    /// Pages that produced no row (empty text or extraction error).
    pub pages_skipped: usize,
}

/// Drives field extraction over every PDF below a directory.
///
/// A fresh PDF processor is created for each file through `new_processor`,
/// so no state leaks from one file into the next.
pub struct BatchProcessor<F> {
    new_processor: F,
}

impl BatchProcessor<fn() -> PdfExtractor> {
    /// Create a batch processor backed by [`PdfExtractor`].
    pub fn new() -> Self {
        Self {
            new_processor: PdfExtractor::new,
        }
    }
}

impl Default for BatchProcessor<fn() -> PdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, P> BatchProcessor<F>
where
    F: Fn() -> P,
    P: PdfProcessor,
{
    /// Create a batch processor with a custom PDF backend.
    pub fn with_processor(new_processor: F) -> Self {
        Self { new_processor }
    }

    /// Process every PDF under `root`, appending one row per page with text.
    ///
    /// Failures of individual files and pages are reported to `sink`. Only
    /// output errors are returned.
    pub fn process_tree<W: Write>(
        &self,
        root: &Path,
        writer: &mut CsvRecordWriter<W>,
        sink: &mut impl DiagnosticSink,
    ) -> Result<BatchSummary> {
        let files = find_pdfs(root);
        info!("Found {} PDF files under {}", files.len(), root.display());

        let mut summary = BatchSummary {
            pdfs_found: files.len(),
            ..Default::default()
        };

        for path in &files {
            self.process_file(path, writer, sink, &mut summary)?;
        }

        Ok(summary)
    }

    /// Process a single PDF file.
    pub fn process_file<W: Write>(
        &self,
        path: &Path,
        writer: &mut CsvRecordWriter<W>,
        sink: &mut impl DiagnosticSink,
        summary: &mut BatchSummary,
    ) -> Result<()> {
        debug!("Processing {}", path.display());

        let pdf = match self.open(path) {
            Ok(pdf) => pdf,
            Err(e) => {
                sink.report(Diagnostic::FileRead(e));
                summary.pdfs_failed += 1;
                return Ok(());
            }
        };

        for page in 1..=pdf.page_count() {
            let text = match pdf.extract_page_text(page) {
                Ok(text) => text,
                Err(error) => {
                    sink.report(Diagnostic::Page {
                        path: path.to_path_buf(),
                        page,
                        error,
                    });
                    summary.pages_skipped += 1;
                    continue;
                }
            };

            // Whitespace-only text counts as empty: lopdf returns bare line
            // breaks for pages without text operators, so no row is written.
            if text.trim().is_empty() {
                sink.report(Diagnostic::EmptyPage {
                    path: path.to_path_buf(),
                    page,
                });
                summary.pages_skipped += 1;
                continue;
            }

            let extraction = extract_fields(&text);
            for error in extraction.errors {
                sink.report(Diagnostic::Field {
                    path: path.to_path_buf(),
                    page,
                    error,
                });
            }

            writer.write_record(&BillingRecord::new(path, page, extraction.fields))?;
            summary.records_written += 1;
        }

        Ok(())
    }

    fn open(&self, path: &Path) -> std::result::Result<P, FileReadError> {
        let data = fs::read(path).map_err(|e| FileReadError::from_io(path, e))?;

        let mut pdf = (self.new_processor)();
        pdf.load(&data).map_err(|e| FileReadError::from_pdf(path, e))?;
        Ok(pdf)
    }
}

/// Find every regular file below `root` whose name ends in `.pdf`, ignoring
/// case. Paths come back in sorted walk order.
pub fn find_pdfs(root: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/**/*.pdf", Pattern::escape(&root.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let paths = match glob_with(&pattern, options) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("Invalid search pattern {}: {}", pattern, e);
            return Vec::new();
        }
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Skipping unreadable path: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::error::{PageError, PdfError};
    use crate::pdf::test_support::build_pdf;
    use pretty_assertions::assert_eq;

    /// Backend reading plain text files: pages are separated by form feeds,
    /// a page reading `!ERR` fails, and files starting with `CORRUPT` do not
    /// load.
    #[derive(Default)]
    struct TextPdf {
        pages: Vec<String>,
    }

    impl PdfProcessor for TextPdf {
        fn load(&mut self, data: &[u8]) -> std::result::Result<(), PdfError> {
            let text = String::from_utf8_lossy(data);
            if text.starts_with("CORRUPT") {
                return Err(PdfError::Parse("bad xref".to_string()));
            }
            self.pages = text.split('\x0c').map(str::to_string).collect();
            Ok(())
        }

        fn page_count(&self) -> u32 {
            self.pages.len() as u32
        }

        fn extract_page_text(&self, page: u32) -> std::result::Result<String, PageError> {
            let text = self.pages[(page - 1) as usize].clone();
            if text == "!ERR" {
                return Err(PageError::TextExtraction("broken font".to_string()));
            }
            Ok(text)
        }
    }

    fn run(root: &Path) -> (Vec<String>, CollectingSink, BatchSummary) {
        let processor = BatchProcessor::with_processor(TextPdf::default);
        let mut writer = CsvRecordWriter::new(Vec::new()).unwrap();
        let mut sink = CollectingSink::new();

        let summary = processor.process_tree(root, &mut writer, &mut sink).unwrap();
        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let rows = output.lines().skip(1).map(str::to_string).collect();
        (rows, sink, summary)
    }

    #[test]
    fn test_find_pdfs_recursive_and_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/c")).unwrap();
        fs::write(dir.path().join("a.pdf"), "").unwrap();
        fs::write(dir.path().join("b/c/d.PDF"), "").unwrap();
        fs::write(dir.path().join("b/notes.txt"), "").unwrap();
        fs::write(dir.path().join("b/pdf"), "").unwrap();
        fs::create_dir_all(dir.path().join("folder.pdf")).unwrap();

        let found = find_pdfs(dir.path());

        assert_eq!(
            found,
            vec![dir.path().join("a.pdf"), dir.path().join("b/c/d.PDF")]
        );
    }

    #[test]
    fn test_find_pdfs_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_pdfs(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_whitespace_only_page_is_dropped_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.pdf");
        fs::write(&path, "Kundenkostenstelle: 12345\x0c  \n").unwrap();

        let (rows, sink, summary) = run(dir.path());

        assert_eq!(rows, vec![format!("{},1,12345,,,,,", path.display())]);
        assert_eq!(sink.diagnostics.len(), 1);
        assert!(matches!(
            sink.diagnostics[0],
            Diagnostic::EmptyPage { page: 2, .. }
        ));
        assert_eq!(summary.records_written, 1);
        assert_eq!(summary.pages_skipped, 1);
    }

    #[test]
    fn test_corrupt_file_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pdf"), "Rechnung 1\x0cRechnung 2").unwrap();
        fs::write(dir.path().join("b.pdf"), "CORRUPT").unwrap();
        fs::write(dir.path().join("c.pdf"), "Rechnung 3").unwrap();

        let (rows, sink, summary) = run(dir.path());

        assert_eq!(rows.len(), 3);
        assert!(rows[2].contains("c.pdf,1,,,3,"));
        assert_eq!(sink.errors().count(), 1);
        assert!(sink.diagnostics[0].to_string().contains("might be corrupt"));
        assert_eq!(
            summary,
            BatchSummary {
                pdfs_found: 3,
                pdfs_failed: 1,
                records_written: 3,
                pages_skipped: 0,
            }
        );
    }

    #[test]
    fn test_page_error_skips_only_that_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.pdf");
        fs::write(&path, "Rechnung 1\x0c!ERR\x0cRechnung 3").unwrap();

        let (rows, sink, _) = run(dir.path());

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(",1,,,1,"));
        assert!(rows[1].contains(",3,,,3,"));
        assert!(matches!(
            &sink.diagnostics[0],
            Diagnostic::Page { page: 2, error: PageError::TextExtraction(_), .. }
        ));
        assert!(sink.diagnostics[0].to_string().contains("page 2"));
    }

    #[test]
    fn test_page_without_labels_still_emits_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.pdf");
        fs::write(&path, "Sehr geehrte Damen und Herren").unwrap();

        let (rows, sink, _) = run(dir.path());

        assert_eq!(rows, vec![format!("{},1,,,,,,", path.display())]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_invalid_date_reported_and_row_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.pdf");
        fs::write(&path, "Rechnung 5 vom 31.13.2023 Endbetrag 1.234,56").unwrap();

        let (rows, sink, _) = run(dir.path());

        assert_eq!(rows, vec![format!("{},1,,,5,,,1234.56", path.display())]);
        assert_eq!(sink.warnings().count(), 1);
        assert!(sink.diagnostics[0].to_string().contains("'31.13.2023'"));
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let processor = BatchProcessor::with_processor(TextPdf::default);
        let mut writer = CsvRecordWriter::new(Vec::new()).unwrap();
        let mut sink = CollectingSink::new();
        let mut summary = BatchSummary::default();

        processor
            .process_file(&dir.path().join("gone.pdf"), &mut writer, &mut sink, &mut summary)
            .unwrap();

        assert_eq!(summary.pdfs_failed, 1);
        assert!(matches!(
            sink.diagnostics[0],
            Diagnostic::FileRead(FileReadError::NotFound(_))
        ));
        assert_eq!(writer.records_written(), 0);
    }

    #[test]
    fn test_missing_root_yields_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let processor = BatchProcessor::new();
        let mut writer = CsvRecordWriter::new(Vec::new()).unwrap();
        let mut sink = CollectingSink::new();

        let summary = processor
            .process_tree(&dir.path().join("invoices"), &mut writer, &mut sink)
            .unwrap();

        assert_eq!(summary, BatchSummary::default());
        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_real_pdfs_with_corrupt_sibling() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.pdf"),
            build_pdf(&["Kundenkostenstelle: 12345 Rechnung 4711", ""]),
        )
        .unwrap();
        fs::write(dir.path().join("b.pdf"), "not a pdf at all").unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(
            dir.path().join("sub/c.pdf"),
            build_pdf(&["Bestellnummer: 77 Endbetrag 10,00"]),
        )
        .unwrap();

        let processor = BatchProcessor::new();
        let mut writer = CsvRecordWriter::new(Vec::new()).unwrap();
        let mut sink = CollectingSink::new();
        let summary = processor.process_tree(dir.path(), &mut writer, &mut sink).unwrap();

        assert_eq!(summary.pdfs_found, 3);
        assert_eq!(summary.pdfs_failed, 1);
        assert_eq!(summary.records_written, 2);
        assert_eq!(sink.errors().count(), 1);
        assert_eq!(sink.warnings().count(), 1);

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert!(rows[0].contains(",1,12345,,4711,"));
        assert!(rows[1].ends_with(",77,10.00"));
    }
}
