//! Error types for schedule ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an ingestion run.
///
/// Rows that fail to parse are not errors; they are counted in
/// [`SkipTally`](crate::SkipTally).
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Tabular Errors ===
    /// Malformed CSV content.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input table lacks required columns.
    #[error("input CSV {path} missing required columns: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    /// De-duplication key names a column the table does not have.
    #[error("key column '{column}' not found in {path}")]
    UnknownKeyColumn { column: String, path: PathBuf },

    // === Schedule Errors ===
    /// Schedule document is not valid JSON of the expected shape.
    #[error("failed to parse schedule {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_name() {
        let err = IngestError::MissingColumns {
            path: PathBuf::from("schedules.csv"),
            columns: vec!["airline_icao".to_string(), "number".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "input CSV schedules.csv missing required columns: airline_icao, number"
        );
    }
}
