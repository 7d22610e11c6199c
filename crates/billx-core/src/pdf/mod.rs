//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::{PageError, PdfError};

/// Trait for PDF processing implementations.
///
/// One instance handles one document: it is loaded once and then queried
/// page by page.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<(), PdfError>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String, PageError>;
}
