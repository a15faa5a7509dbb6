//! Plain-text rendering of a reconciliation result

use bigdecimal::{BigDecimal, RoundingMode};
use std::io::{self, Write};

use crate::reconciliation::ReconciliationResult;

const WIDTH: usize = 80;

/// Run parameters echoed at the top of a report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportParams {
    pub system_file: String,
    pub bank_files: String,
    pub start_date: String,
    pub end_date: String,
}

/// Format an amount with two decimals behind the currency prefix
pub fn format_amount(currency_prefix: &str, amount: &BigDecimal) -> String {
    format!(
        "{} {}",
        currency_prefix,
        amount.with_scale_round(2, RoundingMode::HalfUp)
    )
}

/// One-line verdict for the end of a run
pub fn outcome_message(result: &ReconciliationResult) -> &'static str {
    if result.is_fully_reconciled() {
        "Reconciliation completed successfully - All transactions MATCHED!"
    } else {
        "Reconciliation completed successfully - There are UNMATCHED transactions or discrepancies."
    }
}

/// Write the full report
pub fn write_report<W: Write>(
    w: &mut W,
    result: &ReconciliationResult,
    params: Option<&ReportParams>,
    currency_prefix: &str,
) -> io::Result<()> {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    writeln!(w, "\n{heavy}")?;
    writeln!(w, "TRANSACTION RECONCILIATION SUMMARY")?;
    writeln!(w, "{heavy}")?;

    if let Some(params) = params {
        writeln!(w, "\nReconciliation Parameters:")?;
        writeln!(w, "  System Transaction File: {}", params.system_file)?;
        writeln!(w, "  Bank Statement Files: {}", params.bank_files)?;
        writeln!(w, "  Date Range: {} to {}", params.start_date, params.end_date)?;
    }

    writeln!(w, "\nReconciliation Results:")?;
    writeln!(w, "  Total Transactions Processed: {}", result.total_transactions_processed)?;
    writeln!(w, "  Total Matched Transactions: {}", result.total_matched_transactions)?;
    writeln!(w, "  Total Unmatched Transactions: {}", result.total_unmatched_transactions)?;
    writeln!(
        w,
        "  Total Discrepancies (Amount): {}",
        format_amount(currency_prefix, &result.total_discrepancies)
    )?;

    if !result.unmatched_system_transactions.is_empty() {
        writeln!(w, "\n{light}")?;
        writeln!(
            w,
            "UNMATCHED SYSTEM TRANSACTIONS: {}",
            result.unmatched_system_transactions.len()
        )?;
        writeln!(w, "{light}")?;
        writeln!(
            w,
            "{:<20} {:<10} {:<25} {:>20}",
            "TrxID", "Type", "Transaction Time", "Amount"
        )?;
        for trx in &result.unmatched_system_transactions {
            writeln!(
                w,
                "{:<20} {:<10} {:<25} {:>20}",
                trx.id,
                trx.transaction_type.as_str(),
                trx.transaction_time.format("%Y-%m-%d %H:%M:%S").to_string(),
                format_amount(currency_prefix, &trx.amount)
            )?;
        }
    }

    if !result.unmatched_bank_statement_lines.is_empty() {
        writeln!(w, "\n{light}")?;
        writeln!(w, "UNMATCHED BANK STATEMENTS: {}", result.unmatched_bank_count())?;
        writeln!(w, "{light}")?;

        for (source, lines) in &result.unmatched_bank_statement_lines {
            writeln!(w, "\nBank: {} ({} transactions)", source, lines.len())?;
            writeln!(w, "{:<20} {:<10} {:>20}", "Unique Identifier", "Date", "Amount")?;
            for line in lines {
                writeln!(
                    w,
                    "{:<20} {:<10} {:>20}",
                    line.id,
                    line.date.format("%Y-%m-%d").to_string(),
                    format_amount(currency_prefix, &line.amount)
                )?;
            }
        }
    }

    writeln!(w, "\n{heavy}")?;
    Ok(())
}

/// Render the report into a string
pub fn render_report(
    result: &ReconciliationResult,
    params: Option<&ReportParams>,
    currency_prefix: &str,
) -> String {
    let mut buffer = Vec::new();
    write_report(&mut buffer, result, params, currency_prefix)
        .expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}
