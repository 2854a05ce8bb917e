//! Error types for the CLI.

use kesra_core::DataError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset loading or validation failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The config file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml_ng::Error,
    },

    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// Config file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_is_transparent() {
        let err = CliError::from(DataError::Empty);
        assert_eq!(err.to_string(), "dataset contains no rows");
    }
}
