//! Shared CSV reading with shape checks

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

use crate::parser::{ParseError, ParseResult};
use crate::utils::validation::{validate_csv_extension, validate_file_exists};

/// Read a CSV file after checking its extension and existence
pub fn read_csv_file(path: &Path, expected_columns: usize) -> ParseResult<Vec<StringRecord>> {
    validate_csv_extension(path)?;
    validate_file_exists(path)?;

    let file = std::fs::File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, expected_columns)
}

/// Read CSV data with a header row, returning the data rows
///
/// Every row, header included, must have exactly `expected_columns`
/// fields and at least one data row must be present.
pub fn read_csv<R: Read>(reader: R, expected_columns: usize) -> ParseResult<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(ParseError::Empty);
    }
    check_columns(headers, 1, expected_columns)?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        check_columns(&record, i + 2, expected_columns)?;
        rows.push(record);
    }

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(rows)
}

fn check_columns(record: &StringRecord, row: usize, expected: usize) -> ParseResult<()> {
    if record.len() != expected {
        return Err(ParseError::ColumnCount {
            row,
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_data_rows() {
        let data = "trxID,amount,type,transactionTime\n\
                    TRX001,1000.00,CREDIT,2024-01-15 10:30:00\n\
                    TRX002,500.50,DEBIT,2024-01-16\n";
        let rows = read_csv(data.as_bytes(), 4).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "TRX002");
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = read_csv("unique_identifier,amount,date\n".as_bytes(), 3).unwrap_err();
        assert!(matches!(err, ParseError::Empty));

        let err = read_csv("".as_bytes(), 3).unwrap_err();
        assert!(matches!(err, ParseError::Empty));
    }

    #[test]
    fn test_column_count_mismatch_reports_row() {
        let data = "unique_identifier,amount,date\nB1,10,2024-01-15\nB2,20\n";
        let err = read_csv(data.as_bytes(), 3).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ColumnCount { row: 3, expected: 3, found: 2 }
        ));

        let data = "unique_identifier,amount,date,extraColumn\nB1,10,2024-01-15,extra\n";
        let err = read_csv(data.as_bytes(), 3).unwrap_err();
        assert!(matches!(err, ParseError::ColumnCount { row: 1, .. }));
    }

    #[test]
    fn test_file_checks_run_first() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("transactions.txt");
        std::fs::write(&txt, "some data").unwrap();

        assert!(matches!(
            read_csv_file(&txt, 4),
            Err(ParseError::InvalidExtension { .. })
        ));
        assert!(matches!(
            read_csv_file(&dir.path().join("missing.csv"), 4),
            Err(ParseError::FileNotFound(_))
        ));
    }
}
