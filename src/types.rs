//! Core types and data structures for the reconciliation system

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::parser::ParseError;

/// Direction of money movement, shared by ledger entries and bank lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money leaving the account
    Debit,
    /// Money entering the account
    Credit,
}

impl TransactionType {
    /// Canonical upper-case label used in keys and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "DEBIT",
            TransactionType::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("DEBIT") {
            Ok(TransactionType::Debit)
        } else if s.eq_ignore_ascii_case("CREDIT") {
            Ok(TransactionType::Credit)
        } else {
            Err(format!("unknown transaction type: {s}"))
        }
    }
}

/// Internal ledger entry to be reconciled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemTransaction {
    /// Ledger identifier (trxID)
    pub id: String,
    /// Non-negative magnitude of the transaction
    pub amount: BigDecimal,
    /// Debit or credit
    pub transaction_type: TransactionType,
    /// When the transaction happened, in the configured timezone
    pub transaction_time: DateTime<FixedOffset>,
}

impl SystemTransaction {
    /// Create a new system transaction
    pub fn new(
        id: impl Into<String>,
        amount: BigDecimal,
        transaction_type: TransactionType,
        transaction_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            transaction_type,
            transaction_time,
        }
    }
}

/// A single line of an external bank statement
///
/// The direction is never stored: a negative amount is a debit, anything
/// else is a credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankStatementLine {
    /// Bank-side unique identifier
    pub id: String,
    /// Signed amount, negative for debits
    pub amount: BigDecimal,
    /// Statement day as local midnight in the configured timezone
    pub date: DateTime<FixedOffset>,
    /// Bank or file the line came from
    pub source_name: String,
}

impl BankStatementLine {
    /// Create a new bank statement line
    pub fn new(
        id: impl Into<String>,
        amount: BigDecimal,
        date: DateTime<FixedOffset>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            date,
            source_name: source_name.into(),
        }
    }

    /// Direction derived from the amount sign
    pub fn transaction_type(&self) -> TransactionType {
        if self.amount < BigDecimal::from(0) {
            TransactionType::Debit
        } else {
            TransactionType::Credit
        }
    }

    /// Magnitude of the amount
    pub fn absolute_amount(&self) -> BigDecimal {
        self.amount.abs()
    }
}

/// Errors that can occur while reconciling
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconError>;
