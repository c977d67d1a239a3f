//! CSV shape classification.

use std::fmt;

use crate::domain::grid::Grid;

/// Header tokens that identify the long (one observation per row) table.
pub const LONG_HEADER_TOKENS: [&str; 3] = ["pair1", "pair2", "day"];

/// A matrix header needs more cells than this.
pub const MIN_MATRIX_HEADER_CELLS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvFormat {
    Long,
    Matrix,
    Unrecognized,
}

impl fmt::Display for CsvFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvFormat::Long => write!(f, "long"),
            CsvFormat::Matrix => write!(f, "matrix"),
            CsvFormat::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Decide the grid's shape from its header content and the first two row
/// lengths. Rows past the second are never inspected.
pub fn classify_format(grid: &Grid) -> CsvFormat {
    if grid.len() < 2 {
        return CsvFormat::Unrecognized;
    }
    let header = &grid.rows[0];

    let lowered: Vec<String> = header.iter().map(|cell| cell.to_lowercase()).collect();
    if LONG_HEADER_TOKENS
        .iter()
        .all(|token| lowered.iter().any(|cell| cell == token))
    {
        return CsvFormat::Long;
    }

    if header.len() > MIN_MATRIX_HEADER_CELLS && grid.rows[1].len() == header.len() {
        return CsvFormat::Matrix;
    }

    CsvFormat::Unrecognized
}
