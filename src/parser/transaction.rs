//! System transaction CSV parser

use bigdecimal::BigDecimal;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::config::ReconConfig;
use crate::parser::csv_file::{read_csv, read_csv_file};
use crate::parser::dates::parse_date;
use crate::parser::{ParseError, ParseResult};
use crate::types::*;

/// Column layout: `trxID,amount,type,transactionTime`
pub const TRANSACTION_COLUMN_COUNT: usize = 4;

const COL_TRX_ID: usize = 0;
const COL_AMOUNT: usize = 1;
const COL_TYPE: usize = 2;
const COL_TRANSACTION_TIME: usize = 3;

/// Parses the internal ledger export into [`SystemTransaction`]s
#[derive(Debug, Clone, Default)]
pub struct TransactionParser {
    config: ReconConfig,
}

impl TransactionParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ReconConfig) -> Self {
        Self { config }
    }

    /// Parse a system transaction CSV file
    pub fn parse_csv(&self, path: &Path) -> ParseResult<Vec<SystemTransaction>> {
        let rows = read_csv_file(path, TRANSACTION_COLUMN_COUNT)?;
        let transactions = self.parse_rows(&rows)?;
        debug!(path = %path.display(), rows = transactions.len(), "parsed system transactions");
        Ok(transactions)
    }

    /// Parse system transactions from any CSV reader
    pub fn parse_reader<R: Read>(&self, reader: R) -> ParseResult<Vec<SystemTransaction>> {
        let rows = read_csv(reader, TRANSACTION_COLUMN_COUNT)?;
        self.parse_rows(&rows)
    }

    fn parse_rows(&self, rows: &[StringRecord]) -> ParseResult<Vec<SystemTransaction>> {
        rows.iter()
            .enumerate()
            .map(|(i, record)| self.parse_row(record, i + 2))
            .collect()
    }

    fn parse_row(&self, record: &StringRecord, row: usize) -> ParseResult<SystemTransaction> {
        let raw_amount = &record[COL_AMOUNT];
        let amount = BigDecimal::from_str(raw_amount).map_err(|_| ParseError::InvalidAmount {
            row,
            value: raw_amount.to_string(),
        })?;
        if amount < BigDecimal::from(0) {
            return Err(ParseError::NegativeAmount {
                row,
                value: raw_amount.to_string(),
            });
        }

        let raw_type = &record[COL_TYPE];
        let transaction_type =
            TransactionType::from_str(raw_type).map_err(|_| ParseError::InvalidType {
                row,
                value: raw_type.to_string(),
            })?;

        let raw_time = &record[COL_TRANSACTION_TIME];
        let transaction_time =
            parse_date(raw_time, &self.config).map_err(|_| ParseError::InvalidDate {
                row,
                value: raw_time.to_string(),
            })?;

        Ok(SystemTransaction::new(
            &record[COL_TRX_ID],
            amount,
            transaction_type,
            transaction_time,
        ))
    }
}
