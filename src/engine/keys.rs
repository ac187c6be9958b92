//! Ready-made key selectors for the grouping operations.

use crate::models::Transaction;
use crate::types::AccountId;

pub fn account(transaction: &Transaction) -> AccountId {
    transaction.account_id().to_string()
}

/// Groups by type with case folded away, so "debit" and "DEBIT" land in the same group.
pub fn normalized_type(transaction: &Transaction) -> String {
    transaction.normalized_type()
}
