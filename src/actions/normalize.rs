//! Punctuation stripping for user-entered identifiers and amounts

/// Remove every `-`, as typed into SSNs, EINs, and phone numbers.
pub fn strip_dashes(value: &str) -> String {
    value.replace('-', "")
}

/// Remove every `$` from a currency amount.
pub fn strip_dollars(value: &str) -> String {
    value.replace('$', "")
}
