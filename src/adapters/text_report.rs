//! Plain-text report adapter implementing ReportPort.
//!
//! Prints one card per ranked pair:
//!
//! ```text
//! #1 EURUSD ↔ GBPUSD
//!    Correlation: 92% (ranked by absolute value)
//! ```

use std::io::Write;

use crate::domain::base_filter::BaseFilter;
use crate::domain::error::CorrelationError;
use crate::domain::pipeline::{RankReport, RankStatus};
use crate::ports::report_port::ReportPort;

#[derive(Debug, Clone, Default)]
pub struct TextReport {
    pub show_skipped: bool,
}

impl TextReport {
    pub fn new(show_skipped: bool) -> Self {
        Self { show_skipped }
    }
}

/// One-line summary of a report's outcome.
pub fn status_line(report: &RankReport) -> String {
    match report.status {
        RankStatus::Ranked => format!(
            "Showing top {} strongest correlations.",
            report.ranked.len()
        ),
        RankStatus::EmptyInput => "Nothing to rank: the input is empty.".to_string(),
        RankStatus::NoObservations => {
            "No results. The CSV held no usable correlation values.".to_string()
        }
        RankStatus::NoMatchesForBase => {
            let base = match &report.base {
                BaseFilter::Currency(code) | BaseFilter::Pair(code) => code.as_str(),
                BaseFilter::None | BaseFilter::Invalid(_) => "",
            };
            format!("No correlations involve {}.", base)
        }
    }
}

impl ReportPort for TextReport {
    fn write(&self, report: &RankReport, out: &mut dyn Write) -> Result<(), CorrelationError> {
        writeln!(out, "{}", status_line(report))?;

        for (index, obs) in report.ranked.iter().enumerate() {
            writeln!(out, "#{} {} ↔ {}", index + 1, obs.a, obs.b)?;
            writeln!(
                out,
                "   Correlation: {}% (ranked by absolute value)",
                obs.correlation
            )?;
        }

        if self.show_skipped && !report.skipped.is_empty() {
            writeln!(out, "\nSkipped {} cell(s):", report.skipped.len())?;
            for cell in &report.skipped {
                writeln!(
                    out,
                    "  row {}, column {}: {}",
                    cell.row, cell.column, cell.reason
                )?;
            }
        }

        Ok(())
    }
}
