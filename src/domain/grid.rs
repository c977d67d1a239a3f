//! Row parser: raw CSV text to a grid of trimmed string cells.
//!
//! Handles comma and semicolon delimiters and optional surrounding double
//! quotes. Long-format exports may carry preamble lines before their
//! `pair1,...` header; those lines are discarded.

use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
}

impl Delimiter {
    /// Semicolon only when it strictly outnumbers commas in `line`.
    pub fn detect(line: &str) -> Self {
        let commas = line.matches(',').count();
        let semicolons = line.matches(';').count();
        if semicolons > commas {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }
}

/// Rows of cells. The first row is the header once the grid is non-empty.
///
/// Rows are not padded: a short line stays short and consumers must index
/// defensively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
    pub delimiter: Delimiter,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Parse raw text into a [`Grid`]. Never fails; blank input gives an empty grid.
pub fn parse_grid(raw: &str) -> Grid {
    let lines: Vec<&str> = raw
        .trim()
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Grid::default();
    }

    let retained = match lines.iter().position(|line| is_long_header(line)) {
        Some(index) => {
            if index > 0 {
                debug!("skipping {} preamble line(s) before pair1 header", index);
            }
            &lines[index..]
        }
        None => &lines[..],
    };

    let delimiter = Delimiter::detect(retained[0]);
    let body = retained.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(delimiter.as_byte())
        .from_reader(body.as_bytes());

    let mut rows = Vec::with_capacity(retained.len());
    for (index, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(record.iter().map(clean_cell).collect()),
            Err(e) => warn!("dropping malformed CSV line {}: {}", index + 1, e),
        }
    }

    Grid { rows, delimiter }
}

fn is_long_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("pair1,") || lower.starts_with("pair1;")
}

/// Strip one optional leading and one optional trailing `"`, then trim.
fn clean_cell(cell: &str) -> String {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    let cell = cell.strip_suffix('"').unwrap_or(cell);
    cell.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_yields_empty_grid() {
        assert!(parse_grid("").is_empty());
        assert!(parse_grid("  \n\r\n \t ").is_empty());
    }

    #[test]
    fn splits_on_comma_and_trims_cells() {
        let grid = parse_grid(" ,EURUSD , GBPUSD\nEURUSD, 100 ,85\n");
        assert_eq!(grid.delimiter, Delimiter::Comma);
        assert_eq!(grid.rows[0], vec!["", "EURUSD", "GBPUSD"]);
        assert_eq!(grid.rows[1], vec!["EURUSD", "100", "85"]);
    }

    #[test]
    fn semicolon_chosen_only_when_it_outnumbers_commas() {
        let grid = parse_grid(";EURUSD;GBPUSD\nEURUSD;100;85,5");
        assert_eq!(grid.delimiter, Delimiter::Semicolon);
        assert_eq!(grid.rows[1], vec!["EURUSD", "100", "85,5"]);

        assert_eq!(Delimiter::detect("a;b,c"), Delimiter::Comma);
        assert_eq!(Delimiter::detect("a;b;c,d"), Delimiter::Semicolon);
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let grid = parse_grid("a,b\r\n\r\n1,2\r\n\n3,4\r\n");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.rows[2], vec!["3", "4"]);
    }

    #[test]
    fn strips_one_layer_of_double_quotes() {
        let grid = parse_grid("\"pair1\",\"pair2\"\n\" EURUSD \",\"\"x\"\"");
        assert_eq!(grid.rows[0], vec!["pair1", "pair2"]);
        assert_eq!(grid.rows[1], vec!["EURUSD", "\"x\""]);
    }

    #[test]
    fn discards_preamble_before_pair1_header() {
        let text = "Correlation snapshot\nPeriod: 50\nPAIR1;pair2;day\nEURUSD;GBPUSD;92%\n";
        let grid = parse_grid(text);
        assert_eq!(grid.delimiter, Delimiter::Semicolon);
        assert_eq!(grid.header().unwrap(), ["PAIR1", "pair2", "day"]);
        assert_eq!(grid.data_rows().len(), 1);
    }

    #[test]
    fn pair1_header_detects_its_own_delimiter() {
        let text = "title;with;semicolons;here\npair1,pair2,day\nEURUSD,GBPUSD,0.92";
        let grid = parse_grid(text);
        assert_eq!(grid.delimiter, Delimiter::Comma);
        assert_eq!(grid.rows[1], vec!["EURUSD", "GBPUSD", "0.92"]);
    }

    #[test]
    fn first_line_is_header_without_pair1() {
        let grid = parse_grid("label,A\nA,1");
        assert_eq!(grid.header().unwrap(), ["label", "A"]);
    }

    #[test]
    fn short_rows_are_not_padded() {
        let grid = parse_grid("x,a,b,c\na,1\n");
        assert_eq!(grid.rows[1].len(), 2);
    }

    #[test]
    fn data_rows_empty_for_header_only() {
        let grid = parse_grid("pair1,pair2,day");
        assert!(grid.data_rows().is_empty());
    }
}
