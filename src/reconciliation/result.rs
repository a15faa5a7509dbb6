//! Reconciliation outcome consumed by reporting

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::*;

/// A system transaction paired with a bank line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    /// Ledger identifier of the system side
    pub system_id: String,
    /// Bank-side unique identifier
    pub bank_id: String,
    /// Source the bank line came from
    pub source_name: String,
    /// `|system amount - bank absolute amount|`
    pub discrepancy: BigDecimal,
}

/// Result of one reconciliation run
///
/// Built incrementally by the engine and read-only afterwards. Only
/// records inside the run's date range are counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// System transactions considered after filtering
    pub total_system_transactions: usize,
    /// Bank lines considered after filtering
    pub total_bank_statement_lines: usize,
    /// Sum of both sides
    pub total_transactions_processed: usize,
    /// Number of matched pairs
    pub total_matched_transactions: usize,
    /// Unmatched system transactions plus unmatched bank lines
    pub total_unmatched_transactions: usize,
    /// Pairs in the order they were made
    pub matched_pairs: Vec<MatchedPair>,
    /// Unmatched system transactions in input order
    pub unmatched_system_transactions: Vec<SystemTransaction>,
    /// Unmatched bank lines grouped by source, input order within a source
    pub unmatched_bank_statement_lines: BTreeMap<String, Vec<BankStatementLine>>,
    /// Sum of discrepancies over matched pairs
    pub total_discrepancies: BigDecimal,
}

impl ReconciliationResult {
    /// Start an empty result for the given post-filter record counts
    pub fn new(total_system_transactions: usize, total_bank_statement_lines: usize) -> Self {
        Self {
            total_system_transactions,
            total_bank_statement_lines,
            total_transactions_processed: 0,
            total_matched_transactions: 0,
            total_unmatched_transactions: 0,
            matched_pairs: Vec::new(),
            unmatched_system_transactions: Vec::new(),
            unmatched_bank_statement_lines: BTreeMap::new(),
            total_discrepancies: BigDecimal::from(0),
        }
    }

    /// Record a pair and accumulate its discrepancy
    pub fn record_match(&mut self, system: &SystemTransaction, bank: &BankStatementLine) {
        let discrepancy = (&system.amount - bank.absolute_amount()).abs();
        self.total_matched_transactions += 1;
        self.total_discrepancies += &discrepancy;
        self.matched_pairs.push(MatchedPair {
            system_id: system.id.clone(),
            bank_id: bank.id.clone(),
            source_name: bank.source_name.clone(),
            discrepancy,
        });
    }

    /// Append a system transaction that found no partner
    pub fn push_unmatched_system(&mut self, transaction: SystemTransaction) {
        self.unmatched_system_transactions.push(transaction);
    }

    /// Append a bank line that was never consumed
    pub fn push_unmatched_bank(&mut self, line: BankStatementLine) {
        self.unmatched_bank_statement_lines
            .entry(line.source_name.clone())
            .or_default()
            .push(line);
    }

    /// Compute the derived totals once pairing and collection are done
    pub fn finalize(&mut self) {
        self.total_transactions_processed =
            self.total_system_transactions + self.total_bank_statement_lines;
        self.total_unmatched_transactions =
            self.unmatched_system_transactions.len() + self.unmatched_bank_count();
    }

    /// Number of unmatched bank lines across all sources
    pub fn unmatched_bank_count(&self) -> usize {
        self.unmatched_bank_statement_lines
            .values()
            .map(|lines| lines.len())
            .sum()
    }

    /// True when nothing is left unmatched and no pair disagrees on amount
    pub fn is_fully_reconciled(&self) -> bool {
        self.total_unmatched_transactions == 0 && self.total_discrepancies == BigDecimal::from(0)
    }

    /// Check that every processed record is accounted for exactly once
    pub fn is_consistent(&self) -> bool {
        self.total_matched_transactions * 2
            + self.unmatched_system_transactions.len()
            + self.unmatched_bank_count()
            == self.total_transactions_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use std::str::FromStr;

    fn line(id: &str, amount: &str, source: &str) -> BankStatementLine {
        BankStatementLine::new(
            id,
            BigDecimal::from_str(amount).unwrap(),
            FixedOffset::east_opt(7 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
                .unwrap(),
            source,
        )
    }

    #[test]
    fn test_unmatched_bank_lines_grouped_by_source() {
        let mut result = ReconciliationResult::new(0, 3);
        result.push_unmatched_bank(line("A1", "10", "bank_a"));
        result.push_unmatched_bank(line("B1", "20", "bank_b"));
        result.push_unmatched_bank(line("A2", "30", "bank_a"));
        result.finalize();

        let a: Vec<&str> = result.unmatched_bank_statement_lines["bank_a"]
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(a, vec!["A1", "A2"]);
        assert_eq!(result.unmatched_bank_statement_lines["bank_b"].len(), 1);
        assert_eq!(result.unmatched_bank_count(), 3);
        assert_eq!(result.total_unmatched_transactions, 3);
        assert!(result.is_consistent());
        assert!(!result.is_fully_reconciled());
    }

    #[test]
    fn test_record_match_accumulates_discrepancy() {
        let tz = FixedOffset::east_opt(7 * 3600).unwrap();
        let system = SystemTransaction::new(
            "TRX001",
            BigDecimal::from_str("100.00").unwrap(),
            TransactionType::Debit,
            tz.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        );

        let mut result = ReconciliationResult::new(1, 1);
        result.record_match(&system, &line("B1", "-99.50", "bank_a"));
        result.finalize();

        assert_eq!(result.total_matched_transactions, 1);
        assert_eq!(result.total_discrepancies, BigDecimal::from_str("0.50").unwrap());
        assert_eq!(result.matched_pairs[0].bank_id, "B1");
        assert_eq!(result.total_transactions_processed, 2);
        assert!(result.is_consistent());
    }
}
