use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{CREDIT, DEBIT};
use crate::types::{eq_ignore_case, fold_case, AccountId};

/// A single financial movement against an account.
///
/// Transactions are immutable once constructed. Aggregations only ever read them and derive new
/// collections, so every field is private and exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The account the movement belongs to.
    account_id: AccountId,
    /// Exact decimal amount, never converted to floating point.
    amount: Decimal,
    /// Free-form type as supplied by the caller, usually some casing of DEBIT or CREDIT.
    transaction_type: String,
    /// Creation time. Informational only, no aggregation looks at it.
    timestamp: DateTime<Utc>
}

impl Transaction {
    /// Creates a transaction stamped with the current time.
    pub fn new(account_id: impl Into<AccountId>, amount: Decimal, transaction_type: impl Into<String>) -> Self {
        Self::with_timestamp(account_id, amount, transaction_type, Utc::now())
    }

    pub fn with_timestamp(
        account_id: impl Into<AccountId>,
        amount: Decimal,
        transaction_type: impl Into<String>,
        timestamp: DateTime<Utc>
    ) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
            transaction_type: transaction_type.into(),
            timestamp
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn transaction_type(&self) -> &str {
        &self.transaction_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The type folded to upper case, suitable as a grouping key.
    pub fn normalized_type(&self) -> String {
        fold_case(&self.transaction_type)
    }

    /// Case-insensitive type check.
    pub fn is_type(&self, transaction_type: &str) -> bool {
        eq_ignore_case(&self.transaction_type, transaction_type)
    }

    pub fn is_debit(&self) -> bool {
        self.is_type(DEBIT)
    }

    pub fn is_credit(&self) -> bool {
        self.is_type(CREDIT)
    }
}

impl Display for Transaction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]:[{}] {}", self.account_id, self.transaction_type, self.amount)
    }
}
