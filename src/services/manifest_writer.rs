//! Filesystem writer for rendered manifests and the pipeline status note.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Writes rendered documents into the Kratix output and metadata directories.
pub struct ManifestWriter {
    output_dir: PathBuf,
    metadata_dir: PathBuf,
}

impl ManifestWriter {
    pub fn new(output_dir: &Path, metadata_dir: &Path) -> Self {
        Self { output_dir: output_dir.to_path_buf(), metadata_dir: metadata_dir.to_path_buf() }
    }

    /// Write one manifest into the output directory. Failure is fatal to the
    /// pipeline; earlier manifests are left in place.
    pub fn write_manifest(&self, filename: &str, content: &str) -> Result<(), AppError> {
        fs::write(self.output_dir.join(filename), content).map_err(|source| {
            AppError::ManifestWrite { filename: filename.to_string(), source }
        })
    }

    /// Write the status note into the metadata directory. Callers treat
    /// failure as a warning, so this returns the raw `io::Error`.
    pub fn write_metadata(&self, filename: &str, content: &str) -> Result<(), io::Error> {
        fs::write(self.metadata_dir.join(filename), content)
    }
}
