//! Ready-made banking reports composed from the aggregation engine.

#[cfg(test)]
mod tests;

use rust_decimal::Decimal;

use crate::engine::{
    apply_percentage_adjustment, count_by_group, filter_by_amount_greater_than, filter_by_type,
    filter_then_sum_by_group, keys, map_to_field, sum_amount_by_group, top_n_by_amount, AggregationError
};
use crate::models::{Transaction, CREDIT, DEBIT};
use crate::types::{AccountId, Grouped};

/// 0.98, i.e. the amount left after a 2% commission.
pub const COMMISSION_FACTOR: Decimal = Decimal::from_parts(98, 0, 0, false, 2);
pub const LARGE_DEBIT_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;
pub const TOP_TRANSACTIONS: i64 = 5;

/// Per account roll-up printed by the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub account_id: AccountId,
    /// Number of transactions of any type.
    pub transactions: usize,
    pub debits: Decimal,
    pub credits: Decimal,
    /// Sum of every amount regardless of type.
    pub total: Decimal
}

pub fn debits(transactions: &[Transaction]) -> Vec<&Transaction> {
    filter_by_type(transactions, DEBIT)
}

pub fn credits(transactions: &[Transaction]) -> Vec<&Transaction> {
    filter_by_type(transactions, CREDIT)
}

/// Amounts of the debits strictly above `threshold`.
pub fn large_debit_amounts(transactions: &[Transaction], threshold: Decimal) -> Vec<Decimal> {
    map_to_field(filter_by_amount_greater_than(debits(transactions), threshold), Transaction::amount)
}

pub fn total_by_account(transactions: &[Transaction]) -> Result<Grouped<AccountId, Decimal>, AggregationError> {
    sum_amount_by_group(transactions, keys::account)
}

pub fn count_by_type(transactions: &[Transaction]) -> Grouped<String, usize> {
    count_by_group(transactions, keys::normalized_type)
}

pub fn debit_totals_by_account(transactions: &[Transaction]) -> Result<Grouped<AccountId, Decimal>, AggregationError> {
    filter_then_sum_by_group(transactions, Transaction::is_debit, keys::account)
}

pub fn credit_totals_by_account(transactions: &[Transaction]) -> Result<Grouped<AccountId, Decimal>, AggregationError> {
    filter_then_sum_by_group(transactions, Transaction::is_credit, keys::account)
}

pub fn amounts_after_commission(transactions: &[Transaction]) -> Result<Vec<Decimal>, AggregationError> {
    apply_percentage_adjustment(transactions, COMMISSION_FACTOR)
}

pub fn top_five_by_amount(transactions: &[Transaction]) -> Result<Vec<&Transaction>, AggregationError> {
    top_n_by_amount(transactions, TOP_TRANSACTIONS)
}

/// Builds one summary per account, in order of each account's first transaction.
///
/// Accounts without debits (or without credits) report zero for that column rather than being
/// left out, since every listed account has at least one transaction.
pub fn account_summaries(transactions: &[Transaction]) -> Result<Vec<AccountSummary>, AggregationError> {
    let counts = count_by_group(transactions, keys::account);
    let debits = debit_totals_by_account(transactions)?;
    let credits = credit_totals_by_account(transactions)?;
    let totals = total_by_account(transactions)?;

    let summaries = counts.into_iter()
        .map(|(account_id, count)| {
            let amount_of = |sums: &Grouped<AccountId, Decimal>| sums.get(&account_id).copied().unwrap_or(Decimal::ZERO);

            AccountSummary {
                transactions: count,
                debits: amount_of(&debits),
                credits: amount_of(&credits),
                total: amount_of(&totals),
                account_id
            }
        })
        .collect();

    Ok(summaries)
}
