//! Symbol normalization.
//!
//! A symbol is an uppercase token with no whitespace or quote characters: a
//! 3-letter currency code (`JPY`) or a 6-letter pair code (`GBPJPY`). An empty
//! normalized symbol means "absent".

/// Canonicalize a raw cell or user token into a comparable symbol.
pub fn normalize_symbol(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '"' && *c != '\'' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// True when `value` is exactly `len` ASCII uppercase letters.
pub fn is_alpha_code(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_uppercase())
}
