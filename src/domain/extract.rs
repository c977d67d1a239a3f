//! Observation extractors, one per supported CSV shape.
//!
//! Extractors never deduplicate: symmetric matrix cells and repeated rows all
//! come through as separate observations and are collapsed by the ranker.
//! Bad cells are skipped and recorded, never fatal.

use std::fmt;

use log::debug;

use crate::domain::base_filter::BaseFilter;
use crate::domain::format::CsvFormat;
use crate::domain::grid::Grid;
use crate::domain::observation::Observation;
use crate::domain::symbol::normalize_symbol;

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Row is shorter than the column being read.
    MissingCell,
    /// A symbol cell normalized to empty.
    MissingSymbol,
    /// Both sides name the same symbol.
    SelfPair,
    /// The correlation cell is not a finite number.
    UnparsableValue(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingCell => write!(f, "missing cell"),
            SkipReason::MissingSymbol => write!(f, "missing symbol"),
            SkipReason::SelfPair => write!(f, "self pair"),
            SkipReason::UnparsableValue(raw) => write!(f, "unparsable value '{}'", raw),
        }
    }
}

/// A cell dropped during extraction. `row` indexes the grid (0 is the header).
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedCell {
    pub row: usize,
    pub column: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub observations: Vec<Observation>,
    pub skipped: Vec<SkippedCell>,
    /// Observations that were valid but rejected by the base filter.
    pub filtered: usize,
}

impl Extraction {
    fn skip(&mut self, row: usize, column: usize, reason: SkipReason) {
        debug!("skipping row {} column {}: {}", row, column, reason);
        self.skipped.push(SkippedCell {
            row,
            column,
            reason,
        });
    }
}

pub trait Extractor {
    fn extract(&self, grid: &Grid, filter: &BaseFilter) -> Extraction;
}

/// Rows of `pair1, pair2, ..., day, ...` with columns located by name.
pub struct LongExtractor;

/// Square grid: header row of column symbols, first cell of each row is the
/// row symbol.
pub struct MatrixExtractor;

impl Extractor for LongExtractor {
    fn extract(&self, grid: &Grid, filter: &BaseFilter) -> Extraction {
        let mut out = Extraction::default();
        let Some(header) = grid.header() else {
            return out;
        };

        let column = |name: &str| header.iter().position(|cell| cell.eq_ignore_ascii_case(name));
        let (Some(first), Some(second), Some(day)) = (column("pair1"), column("pair2"), column("day"))
        else {
            return out;
        };

        for (offset, row) in grid.data_rows().iter().enumerate() {
            let row_index = offset + 1;

            let (Some(raw_a), Some(raw_b)) = (row.get(first), row.get(second)) else {
                out.skip(row_index, first.max(second), SkipReason::MissingCell);
                continue;
            };
            let a = normalize_symbol(raw_a);
            let b = normalize_symbol(raw_b);
            if a.is_empty() || b.is_empty() {
                out.skip(row_index, first, SkipReason::MissingSymbol);
                continue;
            }
            if a == b {
                out.skip(row_index, first, SkipReason::SelfPair);
                continue;
            }

            if !filter.matches(&a, &b) {
                out.filtered += 1;
                continue;
            }

            let Some(raw_value) = row.get(day) else {
                out.skip(row_index, day, SkipReason::MissingCell);
                continue;
            };
            match parse_percentage(raw_value) {
                Some(value) => out.observations.push(Observation::new(a, b, value)),
                None => out.skip(
                    row_index,
                    day,
                    SkipReason::UnparsableValue(raw_value.clone()),
                ),
            }
        }

        out
    }
}

impl Extractor for MatrixExtractor {
    fn extract(&self, grid: &Grid, filter: &BaseFilter) -> Extraction {
        let mut out = Extraction::default();
        let Some(header) = grid.header() else {
            return out;
        };
        let columns: Vec<String> = header.iter().skip(1).map(|cell| normalize_symbol(cell)).collect();

        for (offset, row) in grid.data_rows().iter().enumerate() {
            let row_index = offset + 1;
            let row_symbol = row.first().map(|cell| normalize_symbol(cell)).unwrap_or_default();
            if row_symbol.is_empty() {
                out.skip(row_index, 0, SkipReason::MissingSymbol);
                continue;
            }

            for (j, raw_value) in row.iter().enumerate().skip(1) {
                let column_symbol = columns.get(j - 1).map(String::as_str).unwrap_or("");
                if column_symbol.is_empty() {
                    out.skip(row_index, j, SkipReason::MissingSymbol);
                    continue;
                }
                if column_symbol == row_symbol {
                    continue;
                }

                let Some(value) = parse_percentage(raw_value) else {
                    out.skip(row_index, j, SkipReason::UnparsableValue(raw_value.clone()));
                    continue;
                };

                if !filter.matches(&row_symbol, column_symbol) {
                    out.filtered += 1;
                    continue;
                }
                out.observations
                    .push(Observation::new(row_symbol.clone(), column_symbol, value));
            }
        }

        out
    }
}

/// Run the extractor for `format`. `Unrecognized` yields nothing.
pub fn extract_observations(grid: &Grid, format: CsvFormat, filter: &BaseFilter) -> Extraction {
    match format {
        CsvFormat::Long => LongExtractor.extract(grid, filter),
        CsvFormat::Matrix => MatrixExtractor.extract(grid, filter),
        CsvFormat::Unrecognized => Extraction::default(),
    }
}

/// Parse a percentage cell such as `92.5`, `-0.3` or `85%`.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}
