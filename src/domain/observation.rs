//! Correlation observations between two symbols.

use std::fmt;

/// Separator used in pair keys; never part of a normalized symbol.
pub const PAIR_KEY_SEPARATOR: &str = "::";

/// One correlation value (in percent) for an unordered symbol pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub a: String,
    pub b: String,
    pub correlation: f64,
    pub abs: f64,
}

impl Observation {
    pub fn new(a: impl Into<String>, b: impl Into<String>, correlation: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            correlation,
            abs: correlation.abs(),
        }
    }

    /// Identity of the unordered pair: `(A, B)` and `(B, A)` share a key.
    pub fn key(&self) -> String {
        pair_key(&self.a, &self.b)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}: {}%", self.a, self.b, self.correlation)
    }
}

pub fn pair_key(a: &str, b: &str) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}{PAIR_KEY_SEPARATOR}{hi}")
}
