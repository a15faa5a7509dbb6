//! # Bank Recon
//!
//! Reconciliation of internal ledger entries ("system transactions") against
//! one or more external bank statements.
//!
//! ## Features
//!
//! - **Indexed matching**: bank lines are bucketed by a strategy-defined key,
//!   so each system transaction only looks at its own candidates
//! - **Pluggable strategies**: the [`MatchStrategy`] trait separates candidate
//!   keys from final admission; [`ExactMatchStrategy`] is the default
//! - **Deterministic pairing**: one-to-one, first-match-wins in input order
//! - **Multi-source statements**: unmatched bank lines are grouped by source
//! - **CSV parsing and reporting**: collaborators for the `recon` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_recon::{
//!     reconcile, BankStatementLine, ExactMatchStrategy, SystemTransaction, TransactionType,
//! };
//! use bigdecimal::BigDecimal;
//! use chrono::{FixedOffset, TimeZone};
//!
//! let wib = FixedOffset::east_opt(7 * 3600).unwrap();
//! let system = vec![SystemTransaction::new(
//!     "TRX001",
//!     BigDecimal::from(1000),
//!     TransactionType::Credit,
//!     wib.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
//! )];
//! let bank = vec![BankStatementLine::new(
//!     "BCA-001",
//!     BigDecimal::from(1000),
//!     wib.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
//!     "bank_bca",
//! )];
//!
//! let start = wib.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
//! let result = reconcile(&system, &bank, &ExactMatchStrategy, start, None).unwrap();
//! assert_eq!(result.total_matched_transactions, 1);
//! ```

pub mod config;
pub mod parser;
pub mod reconciliation;
pub mod report;
pub mod service;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::ReconConfig;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
