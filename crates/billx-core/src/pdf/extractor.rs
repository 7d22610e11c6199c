//! PDF text extraction using lopdf.

use lopdf::Document;
use tracing::{debug, trace};

use super::PdfProcessor;
use crate::error::{PageError, PdfError};

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { document: None }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<(), PdfError> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_text(&self, page: u32) -> Result<String, PageError> {
        let doc = self.document.as_ref().ok_or(PageError::NotLoaded)?;

        if !doc.get_pages().contains_key(&page) {
            return Err(PageError::InvalidPage(page));
        }

        let text = doc
            .extract_text(&[page])
            .map_err(|e| PageError::TextExtraction(e.to_string()))?;
        trace!("Page {}: {} chars of text", page, text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::test_support::build_pdf;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert_eq!(extractor.extract_page_text(1), Err(PageError::NotLoaded));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_page_count_and_text() {
        let data = build_pdf(&["Kundenkostenstelle: 12345", ""]);

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 2);
        assert!(extractor
            .extract_page_text(1)
            .unwrap()
            .contains("Kundenkostenstelle: 12345"));
        assert!(extractor.extract_page_text(2).unwrap().trim().is_empty());
    }

    #[test]
    fn test_invalid_page() {
        let data = build_pdf(&["Rechnung 1"]);

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.extract_page_text(5), Err(PageError::InvalidPage(5)));
    }
}
