use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for pipeline operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input document could not be read from disk.
    #[error("Failed to read input {path}: {source}")]
    InputRead { path: PathBuf, source: io::Error },

    /// Input document is not valid YAML for a stack request.
    #[error("Failed to parse input: {0}")]
    InputParse(#[from] serde_yaml::Error),

    /// Bundled values preset missing for a validated tier.
    ///
    /// Tier validation and the embedded asset set cover the same closed set,
    /// so this indicates a packaging defect rather than bad user input.
    #[error("Failed to read values file {0}: not found in bundled assets")]
    PresetNotFound(String),

    /// A rendered manifest could not be written to the output directory.
    #[error("Failed to write {filename}: {source}")]
    ManifestWrite { filename: String, source: io::Error },
}
