//! Bank statement CSV parser

use bigdecimal::BigDecimal;
use csv::StringRecord;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::config::ReconConfig;
use crate::parser::csv_file::{read_csv, read_csv_file};
use crate::parser::dates::parse_date;
use crate::parser::{ParseError, ParseResult};
use crate::types::*;
use crate::utils::validation::source_name_from_path;

/// Column layout: `unique_identifier,amount,date`
pub const BANK_STATEMENT_COLUMN_COUNT: usize = 3;

const COL_UNIQUE_IDENTIFIER: usize = 0;
const COL_AMOUNT: usize = 1;
const COL_DATE: usize = 2;

/// Parses bank statement exports into [`BankStatementLine`]s
///
/// Each file is one source; its name (without extension) becomes the
/// `source_name` of every line it contains.
#[derive(Debug, Clone, Default)]
pub struct BankStatementParser {
    config: ReconConfig,
}

impl BankStatementParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ReconConfig) -> Self {
        Self { config }
    }

    /// Parse one bank statement CSV file
    pub fn parse_csv(&self, path: &Path) -> ParseResult<Vec<BankStatementLine>> {
        let rows = read_csv_file(path, BANK_STATEMENT_COLUMN_COUNT)?;
        let source_name = source_name_from_path(path);
        let lines = self.parse_rows(&rows, &source_name)?;
        debug!(
            path = %path.display(),
            source = %source_name,
            rows = lines.len(),
            "parsed bank statement"
        );
        Ok(lines)
    }

    /// Parse several files in order and concatenate their lines
    ///
    /// Stops at the first file that fails, naming it in the error.
    pub fn parse_multiple_csvs<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> ParseResult<Vec<BankStatementLine>> {
        let mut all_lines = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let lines = self
                .parse_csv(path)
                .map_err(|e| e.in_file(PathBuf::from(path)))?;
            all_lines.extend(lines);
        }
        Ok(all_lines)
    }

    /// Parse bank lines from any CSV reader under the given source name
    pub fn parse_reader<R: Read>(
        &self,
        reader: R,
        source_name: &str,
    ) -> ParseResult<Vec<BankStatementLine>> {
        let rows = read_csv(reader, BANK_STATEMENT_COLUMN_COUNT)?;
        self.parse_rows(&rows, source_name)
    }

    fn parse_rows(
        &self,
        rows: &[StringRecord],
        source_name: &str,
    ) -> ParseResult<Vec<BankStatementLine>> {
        rows.iter()
            .enumerate()
            .map(|(i, record)| self.parse_row(record, i + 2, source_name))
            .collect()
    }

    fn parse_row(
        &self,
        record: &StringRecord,
        row: usize,
        source_name: &str,
    ) -> ParseResult<BankStatementLine> {
        let raw_amount = &record[COL_AMOUNT];
        let amount = BigDecimal::from_str(raw_amount).map_err(|_| ParseError::InvalidAmount {
            row,
            value: raw_amount.to_string(),
        })?;

        let raw_date = &record[COL_DATE];
        let date = parse_date(raw_date, &self.config).map_err(|_| ParseError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;

        Ok(BankStatementLine::new(
            &record[COL_UNIQUE_IDENTIFIER],
            amount,
            date,
            source_name,
        ))
    }
}
