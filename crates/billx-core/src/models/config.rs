//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BillxError, Result};

/// Main configuration for a billx run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillxConfig {
    /// Input archive and extraction location.
    pub input: InputConfig,

    /// Output table settings.
    pub output: OutputConfig,
}

/// Where invoices come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Zip archive holding the PDF invoices.
    pub archive_path: PathBuf,

    /// Directory the archive is unpacked into.
    pub extract_dir: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from("INVOICES.zip"),
            extract_dir: PathBuf::from("invoices"),
        }
    }
}

/// Where records go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV file receiving one row per page.
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("vk_total_billings.csv"),
        }
    }
}

impl BillxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BillxError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| BillxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
