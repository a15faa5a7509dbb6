//! Property-based tests for the reconciliation engine.

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, TimeZone};
use proptest::prelude::*;
use std::collections::HashSet;

use super::engine::reconcile;
use super::strategy::ExactMatchStrategy;
use crate::types::*;

fn at_day(day: u32, hour: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .unwrap()
}

/// Small amount pool so that keys collide often.
fn amount_cents() -> impl Strategy<Value = i64> {
    prop_oneof![Just(1_000_00i64), Just(500_50), Just(75_00), 1i64..2_000]
}

fn transaction_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::Debit), Just(TransactionType::Credit)]
}

fn system_transactions() -> impl Strategy<Value = Vec<SystemTransaction>> {
    prop::collection::vec((amount_cents(), transaction_type(), 1u32..8, 0u32..24), 0..25).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (cents, ty, day, hour))| {
                    SystemTransaction::new(
                        format!("TRX{i:03}"),
                        BigDecimal::new(cents.into(), 2),
                        ty,
                        at_day(day, hour),
                    )
                })
                .collect()
        },
    )
}

fn bank_lines() -> impl Strategy<Value = Vec<BankStatementLine>> {
    prop::collection::vec(
        (
            amount_cents(),
            any::<bool>(),
            1u32..8,
            prop_oneof![Just("bank_bca"), Just("bank_mandiri")],
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cents, negative, day, source))| {
                let signed = if negative { -cents } else { cents };
                BankStatementLine::new(
                    format!("BANK{i:03}"),
                    BigDecimal::new(signed.into(), 2),
                    at_day(day, 0),
                    source,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every filtered record lands in exactly one place.
    #[test]
    fn prop_records_are_conserved(
        system in system_transactions(),
        bank in bank_lines(),
        first_day in 1u32..8,
        span in 0u32..4,
    ) {
        let last_day = (first_day + span).min(7);
        let result = reconcile(
            &system,
            &bank,
            &ExactMatchStrategy,
            at_day(first_day, 0),
            Some(at_day(last_day, 23)),
        )
        .unwrap();

        prop_assert!(result.is_consistent());
        prop_assert_eq!(
            result.total_matched_transactions * 2
                + result.unmatched_system_transactions.len()
                + result.unmatched_bank_count(),
            result.total_system_transactions + result.total_bank_statement_lines
        );
        prop_assert_eq!(result.matched_pairs.len(), result.total_matched_transactions);
    }

    /// Exact matching never produces a discrepancy.
    #[test]
    fn prop_exact_strategy_has_no_discrepancy(
        system in system_transactions(),
        bank in bank_lines(),
    ) {
        let result = reconcile(
            &system,
            &bank,
            &ExactMatchStrategy,
            at_day(1, 0),
            Some(at_day(7, 23)),
        )
        .unwrap();

        prop_assert_eq!(&result.total_discrepancies, &BigDecimal::from(0));
        for pair in &result.matched_pairs {
            prop_assert_eq!(&pair.discrepancy, &BigDecimal::from(0));
        }
    }

    /// Pairing is one-to-one on both sides.
    #[test]
    fn prop_pairs_are_one_to_one(
        system in system_transactions(),
        bank in bank_lines(),
    ) {
        let result = reconcile(
            &system,
            &bank,
            &ExactMatchStrategy,
            at_day(1, 0),
            Some(at_day(7, 23)),
        )
        .unwrap();

        let system_ids: HashSet<&str> = result
            .matched_pairs
            .iter()
            .map(|p| p.system_id.as_str())
            .collect();
        let bank_ids: HashSet<&str> = result
            .matched_pairs
            .iter()
            .map(|p| p.bank_id.as_str())
            .collect();
        prop_assert_eq!(system_ids.len(), result.matched_pairs.len());
        prop_assert_eq!(bank_ids.len(), result.matched_pairs.len());

        for unmatched in &result.unmatched_system_transactions {
            prop_assert!(!system_ids.contains(unmatched.id.as_str()));
        }
        for lines in result.unmatched_bank_statement_lines.values() {
            for line in lines {
                prop_assert!(!bank_ids.contains(line.id.as_str()));
            }
        }
    }
}
