//! End-to-end ranking request: raw CSV text and base text in, report out.
//!
//! Stages run strictly in order: parse grid, classify, interpret base,
//! extract, rank. Format and base problems stop the request before any
//! ranking; cell problems are carried in the report.

use log::info;

use crate::domain::base_filter::{parse_base_filter, BaseFilter};
use crate::domain::error::CorrelationError;
use crate::domain::extract::{extract_observations, SkippedCell};
use crate::domain::format::{classify_format, CsvFormat};
use crate::domain::grid::{parse_grid, Delimiter};
use crate::domain::ranking::{rank_top_n, RankedResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStatus {
    /// At least one observation ranked.
    Ranked,
    /// Input was blank; nothing to do.
    EmptyInput,
    /// The data held no usable observations and no base filter was active.
    NoObservations,
    /// A base filter was active and nothing matched it.
    NoMatchesForBase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankReport {
    pub format: Option<CsvFormat>,
    pub base: BaseFilter,
    pub status: RankStatus,
    pub ranked: RankedResult,
    pub observations: usize,
    pub filtered: usize,
    pub skipped: Vec<SkippedCell>,
}

impl RankReport {
    fn empty(base: BaseFilter) -> Self {
        Self {
            format: None,
            base,
            status: RankStatus::EmptyInput,
            ranked: RankedResult::default(),
            observations: 0,
            filtered: 0,
            skipped: Vec::new(),
        }
    }
}

/// Rank the strongest `top_n` pair correlations in `raw_text`, restricted by
/// `base_text` when it is non-blank.
pub fn run(raw_text: &str, base_text: &str, top_n: usize) -> Result<RankReport, CorrelationError> {
    let base = parse_base_filter(base_text).into_valid()?;

    let grid = parse_grid(raw_text);
    if grid.is_empty() {
        info!("input is empty, nothing to rank");
        return Ok(RankReport::empty(base));
    }

    let format = classify_format(&grid);
    info!("parsed {} rows, format {}, base {}", grid.len(), format, base);
    if format == CsvFormat::Unrecognized {
        let separator = match grid.delimiter {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
        };
        return Err(CorrelationError::UnrecognizedFormat {
            header: grid.header().unwrap_or_default().join(separator),
        });
    }

    let extraction = extract_observations(&grid, format, &base);
    let observations = extraction.observations.len();
    info!(
        "extracted {} observations ({} filtered, {} skipped)",
        observations,
        extraction.filtered,
        extraction.skipped.len()
    );

    let ranked = rank_top_n(extraction.observations, top_n);
    let status = if !ranked.is_empty() {
        RankStatus::Ranked
    } else if base.is_active() {
        RankStatus::NoMatchesForBase
    } else {
        RankStatus::NoObservations
    };

    Ok(RankReport {
        format: Some(format),
        base,
        status,
        ranked,
        observations,
        filtered: extraction.filtered,
        skipped: extraction.skipped,
    })
}
