//! Reconciliation of system transactions against bank statement lines
//!
//! The engine filters both record sets to a [`DateRange`], buckets bank
//! lines by the [`MatchStrategy`](crate::traits::MatchStrategy) key, pairs
//! each system transaction with the first admissible unconsumed candidate
//! and reports everything left over in a [`ReconciliationResult`].

pub mod engine;
pub mod range;
pub mod result;
pub mod strategy;

#[cfg(test)]
mod engine_props;

pub use engine::*;
pub use range::*;
pub use result::*;
pub use strategy::*;
