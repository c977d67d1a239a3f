//! Snapshot symbol basket and download URL.
//!
//! The correlation snapshot is requested for a basket of FX pairs over a
//! look-back period. Downloading is left to an external tool; this module
//! only builds the request.

use std::collections::HashSet;

use crate::domain::symbol::{is_alpha_code, normalize_symbol};

pub const DEFAULT_PERIOD: u32 = 50;

pub const SNAPSHOT_BASE_URL: &str = "https://www.mataf.io/api/tools/csv/correl/snapshot/forex";

/// The 28 major FX crosses.
pub const DEFAULT_SYMBOLS: [&str; 28] = [
    "AUDCAD", "AUDCHF", "AUDJPY", "AUDNZD", "AUDUSD",
    "CADCHF", "CADJPY", "CHFJPY",
    "EURAUD", "EURCAD", "EURCHF", "EURGBP", "EURJPY", "EURNZD", "EURUSD",
    "GBPAUD", "GBPCAD", "GBPCHF", "GBPJPY", "GBPNZD", "GBPUSD",
    "NZDCAD", "NZDCHF", "NZDJPY", "NZDUSD",
    "USDCAD", "USDCHF", "USDJPY",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasketError {
    #[error("empty token in symbol list")]
    EmptyToken,

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),

    #[error("not a 6-letter pair code: {0}")]
    NotAPair(String),
}

pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Parse a comma-separated basket such as `eurusd, GBPJPY`.
pub fn parse_symbols(input: &str) -> Result<Vec<String>, BasketError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let symbol = normalize_symbol(token);
        if symbol.is_empty() {
            return Err(BasketError::EmptyToken);
        }
        if !is_alpha_code(&symbol, 6) {
            return Err(BasketError::NotAPair(symbol));
        }
        if !seen.insert(symbol.clone()) {
            return Err(BasketError::DuplicateSymbol(symbol));
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}

/// URL of the correlation CSV snapshot for `symbols` over `period` bars.
pub fn snapshot_url(period: u32, symbols: &[String]) -> String {
    // `|` is the only character in the joined list that needs escaping.
    let symbol_param = symbols.join("%7C");
    format!("{SNAPSHOT_BASE_URL}/{period}/correlation.csv?symbol={symbol_param}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_basket_is_unique_pairs() {
        let joined = DEFAULT_SYMBOLS.join(",");
        assert_eq!(parse_symbols(&joined).unwrap().len(), 28);
    }

    #[test]
    fn parse_normalizes_tokens() {
        let symbols = parse_symbols(" eurusd , \"GBPJPY\",usd chf").unwrap();
        assert_eq!(symbols, vec!["EURUSD", "GBPJPY", "USDCHF"]);
    }

    #[test]
    fn parse_rejects_empty_token() {
        assert_eq!(parse_symbols("EURUSD,,GBPUSD"), Err(BasketError::EmptyToken));
    }

    #[test]
    fn parse_rejects_duplicates_after_normalizing() {
        assert_eq!(
            parse_symbols("EURUSD,eurusd"),
            Err(BasketError::DuplicateSymbol("EURUSD".into()))
        );
    }

    #[test]
    fn parse_rejects_non_pairs() {
        assert_eq!(parse_symbols("EURUSD,JPY"), Err(BasketError::NotAPair("JPY".into())));
    }

    #[test]
    fn url_joins_symbols_with_encoded_pipe() {
        let url = snapshot_url(50, &["EURUSD".to_string(), "GBPUSD".to_string()]);
        assert_eq!(
            url,
            "https://www.mataf.io/api/tools/csv/correl/snapshot/forex/50/correlation.csv?symbol=EURUSD%7CGBPUSD"
        );
    }

    #[test]
    fn url_uses_default_basket() {
        let url = snapshot_url(DEFAULT_PERIOD, &default_symbols());
        assert!(url.contains("/50/"));
        assert!(url.ends_with("USDCHF%7CUSDJPY"));
        assert_eq!(url.matches("%7C").count(), 27);
    }
}
