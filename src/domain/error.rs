//! Domain error types.

use crate::domain::basket::BasketError;

/// Top-level error type for corrtop.
///
/// Only request-level failures live here. Cell-level problems are recovered
/// during extraction and reported as [`crate::domain::extract::SkippedCell`]s,
/// and empty outcomes are a [`crate::domain::pipeline::RankStatus`].
#[derive(Debug, thiserror::Error)]
pub enum CorrelationError {
    #[error("unrecognized CSV format (header: {header}); expected a pair1/pair2/day table or a square correlation matrix")]
    UnrecognizedFormat { header: String },

    #[error("invalid base '{value}': use a 3-letter currency (e.g. NZD) or a 6-letter pair (e.g. NZDUSD)")]
    InvalidBase { value: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to read correlation data: {reason}")]
    Source { reason: String },

    #[error(transparent)]
    Basket(#[from] BasketError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&CorrelationError> for std::process::ExitCode {
    fn from(err: &CorrelationError) -> Self {
        let code: u8 = match err {
            CorrelationError::Io(_) | CorrelationError::Source { .. } => 1,
            CorrelationError::ConfigParse { .. }
            | CorrelationError::ConfigMissing { .. }
            | CorrelationError::ConfigInvalid { .. }
            | CorrelationError::Basket(_) => 2,
            CorrelationError::UnrecognizedFormat { .. } => 3,
            CorrelationError::InvalidBase { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
