//! Report presentation port trait.

use std::io::Write;

use crate::domain::error::CorrelationError;
use crate::domain::pipeline::RankReport;

/// Port for presenting a ranking to the user.
pub trait ReportPort {
    fn write(&self, report: &RankReport, out: &mut dyn Write) -> Result<(), CorrelationError>;
}
