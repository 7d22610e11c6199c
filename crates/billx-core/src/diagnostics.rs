//! Diagnostic reporting for recoverable failures.
//!
//! The pipeline never aborts on a bad archive, file, page or field. Instead it
//! hands a [`Diagnostic`] to an injected [`DiagnosticSink`] and moves on.

use std::fmt;
use std::path::PathBuf;

use tracing::{error, warn};

use crate::error::{ArchiveError, FieldError, FileReadError, PageError};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A recoverable problem encountered during a run.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// The archive could not be (fully) extracted.
    Archive(ArchiveError),

    /// An archive entry was skipped because its name escapes the destination.
    UnsafeEntry { archive: PathBuf, name: String },

    /// A PDF file was skipped.
    FileRead(FileReadError),

    /// Text extraction failed for one page.
    Page { path: PathBuf, page: u32, error: PageError },

    /// A page produced no text.
    EmptyPage { path: PathBuf, page: u32 },

    /// A matched field value could not be coerced.
    Field { path: PathBuf, page: u32, error: FieldError },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Archive(_) | Self::FileRead(_) | Self::Page { .. } => Severity::Error,
            Self::UnsafeEntry { .. } | Self::EmptyPage { .. } | Self::Field { .. } => {
                Severity::Warning
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive(e) => write!(f, "{}", e),
            Self::UnsafeEntry { archive, name } => write!(
                f,
                "skipping entry '{}' in '{}': path escapes the destination directory",
                name,
                archive.display()
            ),
            Self::FileRead(e) => write!(f, "{}", e),
            Self::Page { path, page, error } => write!(
                f,
                "error extracting text from {}, page {}: {}",
                path.display(),
                page,
                error
            ),
            Self::EmptyPage { path, page } => {
                write!(f, "no text extracted from {}, page {}", path.display(), page)
            }
            Self::Field { path, page, error } => {
                write!(f, "{}, page {}: {}", path.display(), page, error)
            }
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Sink forwarding diagnostics to `tracing` at warn/error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => error!("{}", diagnostic),
            Severity::Warning => warn!("{}", diagnostic),
        }
    }
}

/// Sink keeping every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
