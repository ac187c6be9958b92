use rust_decimal::Decimal;

use crate::engine::arithmetic::exact_mul;
use crate::engine::AggregationError;
use crate::models::Transaction;

/// Keeps the transactions whose type matches `transaction_type`, ignoring case.
pub fn filter_by_type<'a, I>(transactions: I, transaction_type: &str) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>
{
    transactions.into_iter()
        .filter(|transaction| transaction.is_type(transaction_type))
        .collect()
}

/// Keeps the transactions whose amount is strictly greater than `min_amount`.
pub fn filter_by_amount_greater_than<'a, I>(transactions: I, min_amount: Decimal) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>
{
    transactions.into_iter()
        .filter(|transaction| transaction.amount() > min_amount)
        .collect()
}

/// Projects every transaction through `selector`. The output has the same length and order as the input.
pub fn map_to_field<'a, I, T, F>(transactions: I, selector: F) -> Vec<T>
where
    I: IntoIterator<Item = &'a Transaction>,
    F: FnMut(&'a Transaction) -> T
{
    transactions.into_iter().map(selector).collect()
}

/// Multiplies every amount by `factor`, e.g. `0.98` to deduct a 2% commission.
///
/// # Errors
/// Returns `AggregationError::Overflow` if a product does not fit in a `Decimal`, or
/// `AggregationError::PrecisionLoss` if it would need more digits than a `Decimal` holds.
pub fn apply_percentage_adjustment<'a, I>(transactions: I, factor: Decimal) -> Result<Vec<Decimal>, AggregationError>
where
    I: IntoIterator<Item = &'a Transaction>
{
    transactions.into_iter()
        .map(|transaction| exact_mul(transaction.amount(), factor, "apply_percentage_adjustment"))
        .collect()
}
