mod grouped;

pub use grouped::Grouped;

pub type AccountId = String;

/// Compares two strings under simple (locale independent) case folding.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().flat_map(char::to_uppercase).eq(right.chars().flat_map(char::to_uppercase))
}

/// Folds a string to its upper case form so that "debit", "Debit" and "DEBIT" share one key.
pub fn fold_case(value: &str) -> String {
    value.to_uppercase()
}
