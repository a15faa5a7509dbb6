//! Basic reconciliation example

use bank_recon::parser::{BankStatementParser, TransactionParser};
use bank_recon::reconciliation::DateRange;
use bank_recon::report::{render_report, ReportParams};
use bank_recon::{ReconConfig, ReconciliationEngine};
use chrono::NaiveDate;

const SYSTEM_CSV: &str = "\
trxID,amount,type,transactionTime
TRX001,1000.00,CREDIT,2024-01-15 10:30:00
TRX002,500.50,DEBIT,2024-01-15 14:20:00
TRX003,2500.00,CREDIT,2024-01-16 09:15:00
TRX004,75.25,DEBIT,2024-01-17 11:00:00
";

const BCA_CSV: &str = "\
unique_identifier,amount,date
BCA-001,1000.00,2024-01-15
BCA-002,-500.50,15-01-2024
BCA-003,300.00,2024-01-16
";

const MANDIRI_CSV: &str = "\
unique_identifier,amount,date
MDR-001,2500.00,16/01/2024
MDR-002,-75.25,2024-01-18
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bank Recon - Basic Reconciliation Example\n");

    let config = ReconConfig::default();
    let system =
        TransactionParser::with_config(config.clone()).parse_reader(SYSTEM_CSV.as_bytes())?;

    let bank_parser = BankStatementParser::with_config(config.clone());
    let mut bank = bank_parser.parse_reader(BCA_CSV.as_bytes(), "bank_bca")?;
    bank.extend(bank_parser.parse_reader(MANDIRI_CSV.as_bytes(), "bank_mandiri")?);

    println!(
        "Loaded {} system transactions and {} bank lines",
        system.len(),
        bank.len()
    );

    let start = NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 1, 18).ok_or("invalid end date")?;
    let range = DateRange::for_days(start, Some(end), config.timezone)?;

    let engine = ReconciliationEngine::new();
    let result = engine.reconcile_in_range(&system, &bank, &range);

    let params = ReportParams {
        system_file: "<inline>".to_string(),
        bank_files: "bank_bca, bank_mandiri".to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
    };
    print!(
        "{}",
        render_report(&result, Some(&params), &config.currency_prefix)
    );

    Ok(())
}
