mod transaction;

pub use transaction::Transaction;

pub const DEBIT: &str = "DEBIT";
pub const CREDIT: &str = "CREDIT";
