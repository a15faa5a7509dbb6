//! File-level reconciliation: parse inputs, then run the engine

use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;
use tracing::info;

use crate::config::ReconConfig;
use crate::parser::{BankStatementParser, TransactionParser};
use crate::reconciliation::{DateRange, ReconciliationEngine, ReconciliationResult};
use crate::traits::MatchStrategy;
use crate::types::*;

/// Everything needed for one file-based run
#[derive(Debug, Clone)]
pub struct ReconciliationInput {
    /// System transaction CSV
    pub system_transaction_file: PathBuf,
    /// Bank statement CSVs, one source each
    pub bank_statement_files: Vec<PathBuf>,
    /// First included instant
    pub start: DateTime<FixedOffset>,
    /// Last included instant; end of the start day when absent
    pub end: Option<DateTime<FixedOffset>>,
}

/// Ties the parsers to the engine
pub struct ReconciliationService {
    transaction_parser: TransactionParser,
    bank_statement_parser: BankStatementParser,
    engine: ReconciliationEngine,
}

impl Default for ReconciliationService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationService {
    /// Create a service with default configuration and exact matching
    pub fn new() -> Self {
        Self::with_config(ReconConfig::default())
    }

    /// Create a service with a custom configuration and exact matching
    pub fn with_config(config: ReconConfig) -> Self {
        Self {
            transaction_parser: TransactionParser::with_config(config.clone()),
            bank_statement_parser: BankStatementParser::with_config(config),
            engine: ReconciliationEngine::new(),
        }
    }

    /// Replace the match strategy
    pub fn with_strategy(mut self, strategy: Box<dyn MatchStrategy>) -> Self {
        self.engine = ReconciliationEngine::with_strategy(strategy);
        self
    }

    /// Run a reconciliation over files
    ///
    /// The range is validated before any file is opened.
    pub fn reconcile(&self, input: &ReconciliationInput) -> ReconResult<ReconciliationResult> {
        let range = DateRange::new(input.start, input.end)?;

        let system_transactions = self
            .transaction_parser
            .parse_csv(&input.system_transaction_file)
            .map_err(|e| e.in_file(input.system_transaction_file.clone()))?;

        let bank_lines = self
            .bank_statement_parser
            .parse_multiple_csvs(&input.bank_statement_files)?;

        info!(
            system = system_transactions.len(),
            bank = bank_lines.len(),
            sources = input.bank_statement_files.len(),
            start = %range.start(),
            end = %range.end(),
            "loaded reconciliation inputs"
        );

        Ok(self
            .engine
            .reconcile_in_range(&system_transactions, &bank_lines, &range))
    }
}
