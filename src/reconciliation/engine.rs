//! Matching engine: filter, index, pair, aggregate

use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::reconciliation::{DateRange, ExactMatchStrategy, ReconciliationResult};
use crate::traits::*;
use crate::types::*;

/// Reconcile system transactions against bank lines inside `[start, end]`
///
/// `end` defaults to the end of the start's local day. Returns
/// [`ReconError::InvalidRange`] before looking at any record when `start`
/// is after `end`; otherwise always produces a complete result.
pub fn reconcile(
    system_transactions: &[SystemTransaction],
    bank_lines: &[BankStatementLine],
    strategy: &dyn MatchStrategy,
    start: DateTime<FixedOffset>,
    end: Option<DateTime<FixedOffset>>,
) -> ReconResult<ReconciliationResult> {
    let range = DateRange::new(start, end)?;
    Ok(reconcile_in_range(
        system_transactions,
        bank_lines,
        strategy,
        &range,
    ))
}

/// Reconcile against an already validated range
///
/// Pairing is first-match-wins: each system transaction, in input order,
/// takes the first unconsumed bank line in its key bucket that the
/// strategy admits. There is no backtracking.
pub fn reconcile_in_range(
    system_transactions: &[SystemTransaction],
    bank_lines: &[BankStatementLine],
    strategy: &dyn MatchStrategy,
    range: &DateRange,
) -> ReconciliationResult {
    let system: Vec<&SystemTransaction> = system_transactions
        .iter()
        .filter(|trx| range.contains(&trx.transaction_time))
        .collect();
    let bank: Vec<&BankStatementLine> = bank_lines
        .iter()
        .filter(|line| range.contains(&line.date))
        .collect();

    debug!(
        strategy = strategy.name(),
        system_in = system_transactions.len(),
        system_kept = system.len(),
        bank_in = bank_lines.len(),
        bank_kept = bank.len(),
        "filtered records to range"
    );

    let mut result = ReconciliationResult::new(system.len(), bank.len());

    // Bucket positions keep the bank input order, which is the tie-break.
    let mut index: HashMap<MatchKey, Vec<usize>> = HashMap::new();
    for (position, line) in bank.iter().enumerate() {
        let key = strategy.build_key(
            line.transaction_type(),
            &line.absolute_amount(),
            &line.date,
            &line.id,
        );
        index.entry(key).or_default().push(position);
    }
    debug!(buckets = index.len(), "indexed bank lines");

    let mut consumed = vec![false; bank.len()];

    for &transaction in &system {
        let key = strategy.build_key(
            transaction.transaction_type,
            &transaction.amount,
            &transaction.transaction_time,
            &transaction.id,
        );

        let partner = index.get(&key).and_then(|bucket| {
            bucket.iter().copied().find(|&position| {
                !consumed[position] && strategy.is_match(transaction, bank[position])
            })
        });

        match partner {
            Some(position) => {
                consumed[position] = true;
                result.record_match(transaction, bank[position]);
            }
            None => result.push_unmatched_system(transaction.clone()),
        }
    }

    for (position, &line) in bank.iter().enumerate() {
        if !consumed[position] {
            result.push_unmatched_bank(line.clone());
        }
    }

    result.finalize();

    info!(
        processed = result.total_transactions_processed,
        matched = result.total_matched_transactions,
        unmatched = result.total_unmatched_transactions,
        discrepancies = %result.total_discrepancies,
        "reconciliation finished"
    );

    result
}

/// Reconciliation engine bound to one match strategy
pub struct ReconciliationEngine {
    strategy: Box<dyn MatchStrategy>,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Create an engine using exact matching
    pub fn new() -> Self {
        Self {
            strategy: Box::new(ExactMatchStrategy::new()),
        }
    }

    /// Create an engine with a custom strategy
    pub fn with_strategy(strategy: Box<dyn MatchStrategy>) -> Self {
        Self { strategy }
    }

    /// The strategy in use
    pub fn strategy(&self) -> &dyn MatchStrategy {
        self.strategy.as_ref()
    }

    /// See [`reconcile`]
    pub fn reconcile(
        &self,
        system_transactions: &[SystemTransaction],
        bank_lines: &[BankStatementLine],
        start: DateTime<FixedOffset>,
        end: Option<DateTime<FixedOffset>>,
    ) -> ReconResult<ReconciliationResult> {
        reconcile(
            system_transactions,
            bank_lines,
            self.strategy.as_ref(),
            start,
            end,
        )
    }

    /// See [`reconcile_in_range`]
    pub fn reconcile_in_range(
        &self,
        system_transactions: &[SystemTransaction],
        bank_lines: &[BankStatementLine],
        range: &DateRange,
    ) -> ReconciliationResult {
        reconcile_in_range(
            system_transactions,
            bank_lines,
            self.strategy.as_ref(),
            range,
        )
    }
}
