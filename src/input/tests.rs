use super::{load_transactions, read_transactions};

use std::io::Write;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use tempfile::NamedTempFile;

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "account,amount,type,timestamp")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

#[test]
fn test_load_transactions_reads_every_valid_row() -> Result<()> {
    let file = create_temporary_csv(&[
        "ACC001,100.00,DEBIT,2026-01-15T09:30:00Z",
        "ACC002, 200.50 , credit ,2026-01-16T10:00:00Z"
    ])?;

    let transactions = load_transactions(file.path())?;

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].account_id(), "ACC001");
    assert_eq!(transactions[0].amount().to_string(), "100.00");

    let expected = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).single()
        .ok_or_else(|| anyhow!("Invalid timestamp"))?;

    assert_eq!(transactions[0].timestamp(), expected);
    assert_eq!(transactions[1].amount().to_string(), "200.50");
    assert_eq!(transactions[1].transaction_type(), "credit");
    assert!(transactions[1].is_credit());

    Ok(())
}

#[test]
fn test_missing_timestamp_defaults_to_now() -> Result<()> {
    let before = Utc::now();
    let transactions = read_transactions("account,amount,type,timestamp\nACC001,5,DEBIT,\nACC002,6,DEBIT".as_bytes());

    assert_eq!(transactions.len(), 2);
    assert!(transactions.iter().all(|transaction| transaction.timestamp() >= before));

    Ok(())
}

#[test]
fn test_timestamp_column_is_optional() {
    let transactions = read_transactions("account,amount,type\nACC001,5.25,DEBIT".as_bytes());

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount().to_string(), "5.25");
}

#[test]
fn test_malformed_rows_are_skipped() -> Result<()> {
    let file = create_temporary_csv(&[
        "ACC001,10.0,DEBIT,",
        "ACC001,not-a-number,DEBIT,",
        "ACC002,1.5,CREDIT,yesterday",
        "ACC003,2.5,CREDIT,"
    ])?;

    let transactions = load_transactions(file.path())?;
    let accounts: Vec<&str> = transactions.iter().map(|transaction| transaction.account_id()).collect();

    assert_eq!(accounts, vec!["ACC001", "ACC003"]);

    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let result = load_transactions("does-not-exist.csv");

    assert!(result.is_err());
}
