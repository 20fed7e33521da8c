use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while building the tracker classification reports.
#[derive(Error, Debug)]
pub enum TiltError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the CSV header.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A `DateTime` cell did not match the expected format.
    #[error("Invalid timestamp format on row {row}: {value}")]
    TimestampParse { row: usize, value: String },

    /// A tracker cell could not be read as a number.
    #[error("Invalid numeric value in column {column} on row {row}: {value}")]
    ValueParse {
        column: String,
        row: usize,
        value: String,
    },

    /// The input has no tracker columns, so percentages are undefined.
    #[error("No tracker columns found; cannot compute percentages")]
    NoTrackers,

    /// A workbook could not be built or saved.
    #[error("Failed to write spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the tilt crates.
pub type Result<T> = std::result::Result<T, TiltError>;
