//! Error types for the billx-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the billx library.
///
/// Only the fatal kinds live here. Archive, file, page and field failures are
/// reported as diagnostics instead.
#[derive(Error, Debug)]
pub enum BillxError {
    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while unpacking a zip archive.
#[derive(Error, Debug, Clone)]
pub enum ArchiveError {
    /// The archive file does not exist.
    #[error("the zip file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The file is not a zip archive or its structure is damaged.
    #[error("the zip file '{}' is corrupt or not a zip file: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Any other extraction failure.
    #[error("unexpected error while extracting '{}': {reason}", .path.display())]
    Other { path: PathBuf, reason: String },
}

/// Errors raised while opening a PDF file.
#[derive(Error, Debug, Clone)]
pub enum FileReadError {
    /// The PDF disappeared between discovery and processing.
    #[error("the PDF file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The PDF structure could not be parsed.
    #[error("could not read PDF file '{}', it might be corrupt: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The PDF is encrypted with a non-empty password.
    #[error("could not read PDF file '{}', it is encrypted", .0.display())]
    Encrypted(PathBuf),

    /// Any other failure while opening the file.
    #[error("unexpected error while processing '{}': {reason}", .path.display())]
    Other { path: PathBuf, reason: String },
}

/// Errors reported by a PDF backend while loading a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    /// Failed to parse the PDF structure.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be opened with an empty password.
    #[error("PDF is encrypted")]
    Encrypted,
}

/// Errors raised while extracting the text of a single page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The requested page does not exist.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// The PDF backend failed to produce text for the page.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// No document has been loaded yet.
    #[error("no document loaded")]
    NotLoaded,
}

/// Recoverable problems while coercing matched field text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The billing date matched the pattern but is not a calendar date.
    #[error("error parsing date from string '{value}', setting billing date to none")]
    InvalidDate { value: String },

    /// The total amount matched the pattern but is not a number.
    #[error("error parsing amount from string '{value}', setting total amount to none")]
    InvalidAmount { value: String },
}

impl FileReadError {
    /// Classify an I/O error raised while reading a PDF from disk.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Other {
                path,
                reason: err.to_string(),
            },
        }
    }
}

impl FileReadError {
    /// Attach the file path to a backend load failure.
    pub fn from_pdf(path: impl Into<PathBuf>, err: PdfError) -> Self {
        let path = path.into();
        match err {
            PdfError::Parse(reason) => Self::Corrupt { path, reason },
            PdfError::Encrypted => Self::Encrypted(path),
        }
    }
}

/// Result type for the billx library.
pub type Result<T> = std::result::Result<T, BillxError>;
