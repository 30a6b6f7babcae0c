//! Error types for directory scanning and table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while discovering and loading CSV files.
#[derive(Debug, Error)]
pub enum LoaderError {
    // === Directory-level errors (always fatal) ===
    /// The input path does not exist or is not a directory.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The directory exists but no entry matched the CSV pattern.
    #[error("no files matching '{pattern}' found in {}", path.display())]
    NoCsvFilesFound { path: PathBuf, pattern: String },

    /// Failed to read directory entries.
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured file pattern is not a valid glob.
    #[error("invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    // === Per-file errors ===
    /// A CSV file could not be read or parsed as numeric data.
    #[error("failed to load {}: {reason}", path.display())]
    FileLoadFailure { path: PathBuf, reason: String },

    /// The file name has nothing left to derive an identifier from.
    #[error("cannot derive an identifier from file name '{file}'")]
    EmptyIdentifier { file: String },
}

impl LoaderError {
    /// Whether this error concerns a single file rather than the whole run.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::FileLoadFailure { .. } | Self::EmptyIdentifier { .. })
    }
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_path() {
        let err = LoaderError::DirectoryNotFound { path: PathBuf::from("/data/missing") };
        assert_eq!(err.to_string(), "directory not found: /data/missing");

        let err = LoaderError::NoCsvFilesFound {
            path: PathBuf::from("/data/empty"),
            pattern: "*.csv".to_string(),
        };
        assert_eq!(err.to_string(), "no files matching '*.csv' found in /data/empty");
    }

    #[test]
    fn test_per_file_classification() {
        let fatal = LoaderError::DirectoryNotFound { path: PathBuf::from("x") };
        assert!(!fatal.is_per_file());

        let per_file = LoaderError::FileLoadFailure {
            path: PathBuf::from("x.csv"),
            reason: "bad".to_string(),
        };
        assert!(per_file.is_per_file());
        assert!(LoaderError::EmptyIdentifier { file: ".csv".to_string() }.is_per_file());
    }
}
