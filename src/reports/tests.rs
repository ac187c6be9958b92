use super::*;

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::Transaction;

fn create_transaction(account_id: &str, amount: &str, transaction_type: &str) -> Result<Transaction> {
    Ok(Transaction::new(account_id, Decimal::from_str(amount)?, transaction_type))
}

fn decimal(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn ledger() -> Result<Vec<Transaction>> {
    Ok(vec![
        create_transaction("ACC001", "100.00", "DEBIT")?,
        create_transaction("ACC001", "150.00", "debit")?,
        create_transaction("ACC002", "200.00", "DEBIT")?,
        create_transaction("ACC001", "75.00", "CREDIT")?,
        create_transaction("ACC002", "150.00", "Credit")?,
        create_transaction("ACC003", "20.50", "DEBIT")?
    ])
}

#[test]
fn test_commission_factor_is_ninety_eight_percent() -> Result<()> {
    assert_eq!(COMMISSION_FACTOR, decimal("0.98")?);
    assert_eq!(COMMISSION_FACTOR.to_string(), "0.98");

    Ok(())
}

#[test]
fn test_debits_and_credits_split_the_ledger() -> Result<()> {
    let transactions = ledger()?;

    assert_eq!(debits(&transactions).len(), 4);
    assert_eq!(credits(&transactions).len(), 2);

    Ok(())
}

#[test]
fn test_large_debit_amounts_excludes_threshold_and_credits() -> Result<()> {
    let transactions = ledger()?;

    let amounts = large_debit_amounts(&transactions, LARGE_DEBIT_THRESHOLD);

    assert_eq!(amounts, vec![decimal("150.00")?, decimal("200.00")?]);

    Ok(())
}

#[test]
fn test_debit_totals_by_account() -> Result<()> {
    let transactions = ledger()?;

    let totals = debit_totals_by_account(&transactions)?;

    assert_eq!(totals.get("ACC001"), Some(&decimal("250.00")?));
    assert_eq!(totals.get("ACC002"), Some(&decimal("200.00")?));
    assert_eq!(totals.get("ACC003"), Some(&decimal("20.50")?));

    Ok(())
}

#[test]
fn test_count_by_type_uses_normalized_types() -> Result<()> {
    let transactions = ledger()?;

    let counts = count_by_type(&transactions);
    let entries: Vec<(String, usize)> = counts.into_iter().collect();

    assert_eq!(entries, vec![("DEBIT".to_string(), 4), ("CREDIT".to_string(), 2)]);

    Ok(())
}

#[test]
fn test_amounts_after_commission() -> Result<()> {
    let transactions = ledger()?;

    let amounts = amounts_after_commission(&transactions)?;

    assert_eq!(amounts.len(), transactions.len());
    assert_eq!(amounts[0], decimal("98.00")?);
    assert_eq!(amounts[5].to_string(), "20.0900");

    Ok(())
}

#[test]
fn test_top_five_by_amount() -> Result<()> {
    let transactions = ledger()?;

    let top = top_five_by_amount(&transactions)?;
    let amounts: Vec<String> = top.iter().map(|transaction| transaction.amount().to_string()).collect();

    assert_eq!(amounts, vec!["200.00", "150.00", "150.00", "100.00", "75.00"]);
    assert_eq!(top[1].account_id(), "ACC001");
    assert_eq!(top[2].account_id(), "ACC002");

    Ok(())
}

#[test]
fn test_account_summaries_follow_first_appearance() -> Result<()> {
    let transactions = ledger()?;

    let summaries = account_summaries(&transactions)?;

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0], AccountSummary {
        account_id: "ACC001".to_string(),
        transactions: 3,
        debits: decimal("250.00")?,
        credits: decimal("75.00")?,
        total: decimal("325.00")?
    });
    assert_eq!(summaries[1].account_id, "ACC002");
    assert_eq!(summaries[1].total, decimal("350.00")?);
    assert_eq!(summaries[2].account_id, "ACC003");
    assert!(summaries[2].credits.is_zero());

    Ok(())
}

#[test]
fn test_reports_on_empty_ledger() -> Result<()> {
    let transactions: Vec<Transaction> = Vec::new();

    assert!(account_summaries(&transactions)?.is_empty());
    assert!(total_by_account(&transactions)?.is_empty());
    assert!(top_five_by_amount(&transactions)?.is_empty());
    assert!(large_debit_amounts(&transactions, LARGE_DEBIT_THRESHOLD).is_empty());

    Ok(())
}
