//! Built-in match strategies

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset};

use crate::traits::*;
use crate::types::*;

/// Matches on exact direction, amount and calendar day
///
/// Time-of-day and identifiers are ignored. Because the key already pins
/// all three fields, every same-key candidate is admissible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchStrategy;

impl ExactMatchStrategy {
    /// Create a new exact match strategy
    pub fn new() -> Self {
        Self
    }
}

impl MatchStrategy for ExactMatchStrategy {
    fn build_key(
        &self,
        transaction_type: TransactionType,
        amount: &BigDecimal,
        date: &DateTime<FixedOffset>,
        _id: &str,
    ) -> MatchKey {
        // normalized() drops trailing zeros so 1000.00 and 1000 share a key
        MatchKey::new(format!(
            "{}_{}_{}",
            transaction_type,
            amount.normalized(),
            date.format("%Y-%m-%d")
        ))
    }

    fn is_match(&self, _system: &SystemTransaction, _bank: &BankStatementLine) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}
