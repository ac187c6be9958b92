use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_aggregates::config::{CliConfig, USAGE};
use transaction_aggregates::engine::{concatenate_distinct_keys, keys, max_amount, top_n_by_amount, total_amount};
use transaction_aggregates::input::load_transactions;
use transaction_aggregates::reports::{account_summaries, AccountSummary};

fn main() -> Result<()> {
    let config = match CliConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let timer = Instant::now();
    let transactions = load_transactions(&config.input_path)?;

    info!("Loaded {} transactions in: {:?}", transactions.len(), timer.elapsed());
    info!("Accounts: {}", concatenate_distinct_keys(&transactions, keys::account, ","));
    info!("Total amount: {}", total_amount(&transactions)?);

    match max_amount(&transactions) {
        Some(max) => info!("Largest amount: {max}"),
        None => info!("Largest amount: none, the input is empty")
    }

    for (rank, transaction) in top_n_by_amount(&transactions, config.top_n)?.iter().enumerate() {
        info!("Top #{}: {transaction}", rank + 1);
    }

    let summaries = account_summaries(&transactions)?;

    write_results_to_stdout(&summaries)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(summaries: &[AccountSummary]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "account,transactions,debits,credits,total")?;

    for summary in summaries {
        writeln!(
            output,
            "{},{},{},{},{}",
            summary.account_id,
            summary.transactions,
            summary.debits,
            summary.credits,
            summary.total
        )?;
    }

    output.flush()?;

    Ok(())
}
