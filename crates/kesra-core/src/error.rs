//! Error types for dataset loading and validation.

use crate::csv::CsvError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not well-formed CSV.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Required columns are absent. All missing names are reported at once.
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A cell that should hold a number does not.
    #[error("row {row}: invalid number {value:?} in column \"{column}\"")]
    InvalidNumber {
        /// 1-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Offending cell content.
        value: String,
    },

    /// A category cell holds an unknown label.
    #[error("row {row}: unknown category {value:?} (expected Rendah, Sedang or Tinggi)")]
    UnknownCategory {
        /// 1-based data row (header excluded).
        row: usize,
        /// Offending cell content.
        value: String,
    },

    /// The file parsed but holds no data rows.
    #[error("dataset contains no rows")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_all() {
        let err = DataError::MissingColumns(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(err.to_string(), "missing required columns: A, B");
    }

    #[test]
    fn test_invalid_number_display() {
        let err = DataError::InvalidNumber {
            row: 3,
            column: "Indeks Pembangunan Manusia".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "row 3: invalid number \"abc\" in column \"Indeks Pembangunan Manusia\""
        );
    }

    #[test]
    fn test_unknown_category_display() {
        let err = DataError::UnknownCategory {
            row: 1,
            value: "Menengah".to_string(),
        };
        assert!(err.to_string().contains("Rendah, Sedang or Tinggi"));
    }
}
