//! `recon`: reconcile a system transaction export against bank statements.
//!
//! ```text
//! recon --system transactions.csv --banks bank_bca.csv,bank_mandiri.csv \
//!       --start 2024-01-01 --end 2024-01-31 --output report.txt
//! ```

use anyhow::{Context, Result};
use bank_recon::config::ReconConfig;
use bank_recon::reconciliation::DateRange;
use bank_recon::report::{outcome_message, write_report, ReportParams};
use bank_recon::service::{ReconciliationInput, ReconciliationService};
use chrono::NaiveDate;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "recon",
    about = "Reconcile system transactions against one or more bank statements"
)]
struct Cli {
    /// System transactions CSV (trxID,amount,type,transactionTime).
    #[arg(long)]
    system: PathBuf,

    /// Bank statement CSVs, comma-separated (unique_identifier,amount,date).
    #[arg(long, value_delimiter = ',', required = true)]
    banks: Vec<PathBuf>,

    /// Start date (YYYY-MM-DD) in the configured timezone.
    #[arg(long)]
    start: NaiveDate,

    /// End date (YYYY-MM-DD), inclusive. Defaults to the start date.
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Also write the report to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// IANA timezone used for dates without an offset.
    #[arg(long, env = "RECON_TIMEZONE", default_value = "Asia/Jakarta")]
    timezone: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ReconConfig::with_timezone_name(&cli.timezone)?;
    let range = DateRange::for_days(cli.start, cli.end, config.timezone)
        .context("invalid reconciliation period")?;

    let bank_files: Vec<PathBuf> = cli
        .banks
        .iter()
        .map(|path| PathBuf::from(path.to_string_lossy().trim()))
        .collect();
    let bank_list = bank_files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    println!("Starting reconciliation process...");
    println!("System Transactions: {}", cli.system.display());
    println!("Bank Statements: {bank_list}");
    println!(
        "Date Range: {} to {}",
        range.start().format("%Y-%m-%d"),
        range.end().format("%Y-%m-%d")
    );
    if let Some(output) = &cli.output {
        println!("Output file: {}", output.display());
    }

    let currency_prefix = config.currency_prefix.clone();
    let service = ReconciliationService::with_config(config);
    let input = ReconciliationInput {
        system_transaction_file: cli.system.clone(),
        bank_statement_files: bank_files,
        start: range.start(),
        end: Some(range.end()),
    };

    let result = service
        .reconcile(&input)
        .context("reconciliation failed")?;

    let params = ReportParams {
        system_file: cli.system.display().to_string(),
        bank_files: bank_list,
        start_date: range.start().format("%Y-%m-%d").to_string(),
        end_date: range.end().format("%Y-%m-%d").to_string(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &result, Some(&params), &currency_prefix)?;

    if let Some(output) = &cli.output {
        let file = File::create(output)
            .with_context(|| format!("failed to create output file {}", output.display()))?;
        let mut writer = BufWriter::new(file);
        write_report(&mut writer, &result, Some(&params), &currency_prefix)?;
        writer.flush()?;
        writeln!(out, "\nResults saved to: {}", output.display())?;
    }

    writeln!(out, "\n{}", outcome_message(&result))?;
    Ok(())
}
