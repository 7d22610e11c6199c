//! Zip archive extraction.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::ArchiveError;

/// Outcome of a successful extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackReport {
    /// Number of files written.
    pub files: usize,
    /// Entry names skipped because they would land outside the destination.
    pub skipped: Vec<String>,
}

/// Extract every entry of `archive_path` into `destination`.
///
/// The destination is created only once the archive has been opened, so a
/// missing or corrupt archive leaves no directory behind. Entries extracted
/// before a mid-archive failure stay on disk.
pub fn extract_archive(archive_path: &Path, destination: &Path) -> Result<UnpackReport, ArchiveError> {
    let file = File::open(archive_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ArchiveError::NotFound(archive_path.to_path_buf()),
        _ => other(archive_path, e),
    })?;

    let mut archive = ZipArchive::new(file).map_err(|e| classify(archive_path, e))?;
    info!(
        "Extracting {} entries from {} to {}",
        archive.len(),
        archive_path.display(),
        destination.display()
    );

    fs::create_dir_all(destination).map_err(|e| other(archive_path, e))?;

    let mut report = UnpackReport::default();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| classify(archive_path, e))?;

        let out_path: PathBuf = match entry.enclosed_name() {
            Some(relative) => destination.join(relative),
            None => {
                report.skipped.push(entry.name().to_string());
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| other(archive_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| other(archive_path, e))?;
        }
        let mut out_file = File::create(&out_path).map_err(|e| other(archive_path, e))?;
        io::copy(&mut entry, &mut out_file).map_err(|e| other(archive_path, e))?;

        debug!("Extracted {}", out_path.display());
        report.files += 1;
    }

    Ok(report)
}

/// Extract an archive, reporting failures instead of returning them.
///
/// Returns the number of files written (zero on failure).
pub fn unpack(archive_path: &Path, destination: &Path, sink: &mut impl DiagnosticSink) -> usize {
    match extract_archive(archive_path, destination) {
        Ok(report) => {
            for name in report.skipped {
                sink.report(Diagnostic::UnsafeEntry {
                    archive: archive_path.to_path_buf(),
                    name,
                });
            }
            report.files
        }
        Err(e) => {
            sink.report(Diagnostic::Archive(e));
            0
        }
    }
}

fn classify(path: &Path, err: ZipError) -> ArchiveError {
    match err {
        ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => ArchiveError::Corrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
        ZipError::Io(e) => other(path, e),
        _ => ArchiveError::Other {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

fn other(path: &Path, err: io::Error) -> ArchiveError {
    ArchiveError::Other {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
