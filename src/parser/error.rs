//! Errors raised while turning CSV files into typed records

use std::path::PathBuf;

/// Parsing and input-validation errors
///
/// Row numbers are 1-based and count the header as row 1.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Path is a directory, not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("File must be a CSV file (got '{extension}'): {}", .path.display())]
    InvalidExtension { path: PathBuf, extension: String },
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV file is empty or has no data rows")]
    Empty,
    #[error("Invalid record at row {row}: expected {expected} columns, got {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid amount at row {row}: {value}")]
    InvalidAmount { row: usize, value: String },
    #[error("Negative amount at row {row}: {value} (use the type column for direction)")]
    NegativeAmount { row: usize, value: String },
    #[error("Invalid transaction type at row {row}: {value}")]
    InvalidType { row: usize, value: String },
    #[error("Invalid date at row {row}: {value}")]
    InvalidDate { row: usize, value: String },
    #[error("Unable to parse date: {0}")]
    UnsupportedDate(String),
    #[error("Local time {0} does not exist in the configured timezone")]
    NonexistentLocalTime(String),
    #[error("Failed to parse {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach the file a row-level error came from
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        ParseError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
