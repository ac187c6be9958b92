use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use rust_decimal::Decimal;

use crate::engine::arithmetic::exact_add;
use crate::engine::AggregationError;
use crate::models::Transaction;
use crate::types::Grouped;

/// Partitions the transactions by `key`.
///
/// Groups are reported in order of the first appearance of their key and each group keeps the
/// relative order of its members from the input.
pub fn group_by<'a, I, K, F>(transactions: I, mut key: F) -> Grouped<K, Vec<&'a Transaction>>
where
    I: IntoIterator<Item = &'a Transaction>,
    K: Eq + Hash + Clone,
    F: FnMut(&'a Transaction) -> K
{
    let mut groups = Grouped::new();

    for transaction in transactions {
        groups.entry_or_insert_with(key(transaction), Vec::new).push(transaction);
    }

    groups
}

/// Sums the amounts of every group. Keys without transactions never appear in the result.
///
/// # Errors
/// Returns `AggregationError::Overflow` if a group total does not fit in a `Decimal`, or
/// `AggregationError::PrecisionLoss` if it would need more digits than a `Decimal` holds.
pub fn sum_amount_by_group<'a, I, K, F>(transactions: I, mut key: F) -> Result<Grouped<K, Decimal>, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>,
    K: Eq + Hash + Clone,
    F: FnMut(&'a Transaction) -> K
{
    let mut sums = Grouped::new();

    for transaction in transactions {
        let sum = sums.entry_or_insert_with(key(transaction), || Decimal::ZERO);

        *sum = exact_add(*sum, transaction.amount(), "sum_amount_by_group")?;
    }

    Ok(sums)
}

pub fn count_by_group<'a, I, K, F>(transactions: I, mut key: F) -> Grouped<K, usize>
where
    I: IntoIterator<Item = &'a Transaction>,
    K: Eq + Hash + Clone,
    F: FnMut(&'a Transaction) -> K
{
    let mut counts = Grouped::new();

    for transaction in transactions {
        *counts.entry_or_insert_with(key(transaction), || 0) += 1;
    }

    counts
}

pub fn unique_keys<'a, I, K, F>(transactions: I, key: F) -> HashSet<K>
where
    I: IntoIterator<Item = &'a Transaction>,
    K: Eq + Hash,
    F: FnMut(&'a Transaction) -> K
{
    transactions.into_iter().map(key).collect()
}

/// Applies `predicate` first, then sums the surviving transactions by `key`.
///
/// # Errors
/// Returns `AggregationError::Overflow` if a group total does not fit in a `Decimal`, or
/// `AggregationError::PrecisionLoss` if it would need more digits than a `Decimal` holds.
pub fn filter_then_sum_by_group<'a, I, P, K, F>(transactions: I, mut predicate: P, key: F) -> Result<Grouped<K, Decimal>, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>,
    P: FnMut(&Transaction) -> bool,
    K: Eq + Hash + Clone,
    F: FnMut(&'a Transaction) -> K
{
    let filtered = transactions.into_iter().filter(|transaction| predicate(*transaction));

    sum_amount_by_group(filtered, key)
}

/// Exact sum of every amount. An empty input sums to zero.
///
/// # Errors
/// Returns `AggregationError::Overflow` if the total does not fit in a `Decimal`, or
/// `AggregationError::PrecisionLoss` if it would need more digits than a `Decimal` holds.
pub fn total_amount<'a, I>(transactions: I) -> Result<Decimal, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>
{
    transactions.into_iter().try_fold(Decimal::ZERO, |total, transaction| {
        exact_add(total, transaction.amount(), "total_amount")
    })
}

/// The largest amount, or `None` when there is nothing to compare.
pub fn max_amount<'a, I>(transactions: I) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a Transaction>
{
    transactions.into_iter().map(Transaction::amount).max()
}

/// Joins the distinct keys in order of first appearance.
///
/// The separator only ever appears between keys, never before the first one or after the last.
pub fn concatenate_distinct_keys<'a, I, K, F>(transactions: I, key: F, separator: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
    K: Eq + Hash + Display,
    F: FnMut(&'a Transaction) -> K
{
    let mut seen = HashSet::new();

    transactions.into_iter()
        .map(key)
        .filter_map(|key| {
            let text = key.to_string();
            seen.insert(key).then_some(text)
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// The `n` transactions with the largest amounts, largest first.
///
/// Ties keep their input order. Asking for more transactions than exist returns all of them.
///
/// # Errors
/// Returns `AggregationError::InvalidArgument` if `n` is negative.
pub fn top_n_by_amount<'a, I>(transactions: I, n: i64) -> Result<Vec<&'a Transaction>, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>
{
    if n < 0 {
        return Err(AggregationError::negative_limit(n));
    }

    let limit = usize::try_from(n).unwrap_or(usize::MAX);
    let mut ranked: Vec<&'a Transaction> = transactions.into_iter().collect();

    //NOTE: sort_by is stable, which is what keeps equal amounts in their original order
    ranked.sort_by(|left, right| right.amount().cmp(&left.amount()));
    ranked.truncate(limit);

    Ok(ranked)
}
