//! Correlation data source port trait.

use crate::domain::error::CorrelationError;

/// Supplies the complete raw CSV text for one ranking request.
pub trait SourcePort {
    fn read_text(&self) -> Result<String, CorrelationError>;

    /// Human-readable origin for status lines.
    fn describe(&self) -> String;
}
