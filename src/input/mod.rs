#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, error};

use crate::models::Transaction;
use crate::types::AccountId;

/// A single row of the input CSV file, before it becomes an immutable `Transaction`.
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    account: AccountId,
    //NOTE: Going through the string form keeps the scale ("100.00" stays 100.00, not 100)
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(rename = "type")]
    transaction_type: String,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        match record.timestamp {
            Some(timestamp) => Transaction::with_timestamp(record.account, record.amount, record.transaction_type, timestamp),
            None => Transaction::new(record.account, record.amount, record.transaction_type)
        }
    }
}

/// Loads every well-formed transaction from the CSV file at `path`.
///
/// # Errors
/// Fails only if the file cannot be opened. Malformed rows are logged and skipped.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Error opening CSV at path: {}", path.display()))?;

    Ok(read_transactions(BufReader::new(file)))
}

/// Reads transactions from any CSV source with an `account,amount,type[,timestamp]` header.
pub fn read_transactions<R: Read>(source: R) -> Vec<Transaction> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut transactions = Vec::new();

    for result in reader.deserialize::<TransactionRecord>() {
        match result {
            Ok(record) => transactions.push(Transaction::from(record)),
            Err(error) => {
                error!("CSV deserialization error: {error}");
            }
        }
    }

    debug!("Read {} transactions", transactions.len());

    transactions
}
