//! Validation utilities for input files

use std::path::Path;

use crate::parser::{ParseError, ParseResult};

/// Validate that a path exists and is a regular file
pub fn validate_file_exists(path: &Path) -> ParseResult<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(ParseError::NotAFile(path.to_path_buf())),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ParseError::FileNotFound(path.to_path_buf()))
        }
        Err(source) => Err(ParseError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Validate that a path carries a `.csv` extension (any case)
pub fn validate_csv_extension(path: &Path) -> ParseResult<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case("csv") {
        Ok(())
    } else {
        Err(ParseError::InvalidExtension {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

/// Source name for a bank file: the file name without its last extension
pub fn source_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
