//! Base filter: optional restriction of results to one currency or pair.

use std::fmt;

use crate::domain::error::CorrelationError;
use crate::domain::symbol::{is_alpha_code, normalize_symbol};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BaseFilter {
    #[default]
    None,
    Currency(String),
    Pair(String),
    Invalid(String),
}

impl BaseFilter {
    /// Interpret user input.
    ///
    /// Exact 3 letters is a currency, exact 6 letters a pair. Input that
    /// merely begins with 6 letters (e.g. `EURUSD1`) is read as the pair
    /// formed by those letters. Anything else is [`BaseFilter::Invalid`].
    pub fn parse(raw: &str) -> Self {
        let value = normalize_symbol(raw);
        if value.is_empty() {
            return BaseFilter::None;
        }
        if is_alpha_code(&value, 3) {
            return BaseFilter::Currency(value);
        }
        if is_alpha_code(&value, 6) {
            return BaseFilter::Pair(value);
        }
        let leading = value.bytes().take_while(u8::is_ascii_uppercase).count();
        if leading >= 6 {
            return BaseFilter::Pair(value[..6].to_string());
        }
        BaseFilter::Invalid(value)
    }

    /// Whether an observation on `(a, b)` passes this filter.
    ///
    /// A currency matches when it is the prefix or suffix of either pair
    /// code. `Invalid` never matches; callers reject it before extraction.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            BaseFilter::None => true,
            BaseFilter::Pair(pair) => a == pair || b == pair,
            BaseFilter::Currency(code) => {
                let code = code.as_str();
                let side = |symbol: &str| symbol.starts_with(code) || symbol.ends_with(code);
                side(a) || side(b)
            }
            BaseFilter::Invalid(_) => false,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, BaseFilter::None)
    }

    /// Reject `Invalid` so a request never silently falls back to no filter.
    pub fn into_valid(self) -> Result<Self, CorrelationError> {
        match self {
            BaseFilter::Invalid(value) => Err(CorrelationError::InvalidBase { value }),
            other => Ok(other),
        }
    }
}

impl fmt::Display for BaseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseFilter::None => write!(f, "none"),
            BaseFilter::Currency(code) => write!(f, "currency {}", code),
            BaseFilter::Pair(pair) => write!(f, "pair {}", pair),
            BaseFilter::Invalid(value) => write!(f, "invalid {}", value),
        }
    }
}

/// Parse a base filter from raw user text.
pub fn parse_base_filter(raw: &str) -> BaseFilter {
    BaseFilter::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_currency() {
        assert_eq!(parse_base_filter("nzd"), BaseFilter::Currency("NZD".into()));
        assert_eq!(parse_base_filter(" \"jpy\" "), BaseFilter::Currency("JPY".into()));
    }

    #[test]
    fn parse_pair() {
        assert_eq!(parse_base_filter("nzdusd"), BaseFilter::Pair("NZDUSD".into()));
        assert_eq!(parse_base_filter("NZD USD"), BaseFilter::Pair("NZDUSD".into()));
    }

    #[test]
    fn parse_empty_is_none() {
        assert_eq!(parse_base_filter(""), BaseFilter::None);
        assert_eq!(parse_base_filter("   "), BaseFilter::None);
    }

    #[test]
    fn parse_invalid_lengths_and_digits() {
        assert_eq!(parse_base_filter("nz"), BaseFilter::Invalid("NZ".into()));
        assert_eq!(parse_base_filter("EURU"), BaseFilter::Invalid("EURU".into()));
        assert_eq!(parse_base_filter("EU1"), BaseFilter::Invalid("EU1".into()));
        assert_eq!(parse_base_filter("EUR/USD"), BaseFilter::Invalid("EUR/USD".into()));
    }

    #[test]
    fn parse_long_input_takes_leading_pair() {
        assert_eq!(parse_base_filter("EURUSD1"), BaseFilter::Pair("EURUSD".into()));
        assert_eq!(parse_base_filter("eurusdx"), BaseFilter::Pair("EURUSD".into()));
    }

    #[test]
    fn none_matches_everything() {
        assert!(BaseFilter::None.matches("EURUSD", "GBPUSD"));
    }

    #[test]
    fn pair_matches_either_side() {
        let filter = BaseFilter::Pair("NZDUSD".into());
        assert!(filter.matches("NZDUSD", "AUDUSD"));
        assert!(filter.matches("AUDUSD", "NZDUSD"));
        assert!(!filter.matches("AUDUSD", "EURUSD"));
    }

    #[test]
    fn currency_matches_prefix_or_suffix() {
        let jpy = BaseFilter::Currency("JPY".into());
        assert!(jpy.matches("GBPJPY", "EURUSD"));
        let eur = BaseFilter::Currency("EUR".into());
        assert!(!eur.matches("GBPJPY", "AUDUSD"));
        assert!(eur.matches("AUDUSD", "EURCHF"));
    }

    #[test]
    fn invalid_is_rejected() {
        let err = BaseFilter::parse("nz").into_valid().unwrap_err();
        assert!(matches!(err, CorrelationError::InvalidBase { value } if value == "NZ"));
        assert!(!BaseFilter::Invalid("NZ".into()).matches("NZDUSD", "AUDUSD"));
    }

    #[test]
    fn active_only_when_filtering() {
        assert!(!BaseFilter::None.is_active());
        assert!(BaseFilter::Currency("USD".into()).is_active());
        assert!(BaseFilter::Pair("EURUSD".into()).is_active());
    }

    #[test]
    fn display_names_mode() {
        assert_eq!(BaseFilter::Pair("EURUSD".into()).to_string(), "pair EURUSD");
        assert_eq!(BaseFilter::None.to_string(), "none");
    }
}
