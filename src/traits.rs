//! Traits for pluggable matching policies

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset};
use std::fmt;

use crate::types::*;

/// Opaque index key produced by a [`MatchStrategy`]
///
/// Only ever used to bucket candidates during a single run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey(String);

impl MatchKey {
    /// Wrap an already-built key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Matching policy used by the reconciliation engine
///
/// A strategy decides which bank lines are candidates for a system
/// transaction (by key equality) and whether a candidate is finally
/// admitted. Implementations must be pure: the same inputs always yield
/// the same key and the same verdict.
pub trait MatchStrategy: Send + Sync {
    /// Build the lookup key for one side of a potential pair
    ///
    /// System transactions pass their amount as-is; bank lines pass their
    /// absolute amount and derived direction. Both sides of a pair that
    /// should be compared must produce equal keys.
    fn build_key(
        &self,
        transaction_type: TransactionType,
        amount: &BigDecimal,
        date: &DateTime<FixedOffset>,
        id: &str,
    ) -> MatchKey;

    /// Final admission check for a same-key candidate
    fn is_match(&self, system: &SystemTransaction, bank: &BankStatementLine) -> bool;

    /// Short name for logs and reports
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<S: MatchStrategy + ?Sized> MatchStrategy for Box<S> {
    fn build_key(
        &self,
        transaction_type: TransactionType,
        amount: &BigDecimal,
        date: &DateTime<FixedOffset>,
        id: &str,
    ) -> MatchKey {
        (**self).build_key(transaction_type, amount, date, id)
    }

    fn is_match(&self, system: &SystemTransaction, bank: &BankStatementLine) -> bool {
        (**self).is_match(system, bank)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
