#![allow(dead_code)]

use corrtop::domain::error::CorrelationError;
pub use corrtop::domain::observation::Observation;
use corrtop::ports::source_port::SourcePort;

pub struct MockSource {
    pub text: Option<String>,
}

impl MockSource {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

impl SourcePort for MockSource {
    fn read_text(&self) -> Result<String, CorrelationError> {
        self.text.clone().ok_or_else(|| CorrelationError::Source {
            reason: "mock source unavailable".into(),
        })
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub const LONG_CSV: &str = "pair1,pair2,5min,day,week\n\
                            EURUSD,GBPUSD,0.1,0.92,0.90\n\
                            GBPUSD,EURUSD,0.1,0.92,0.90\n";

/// A long-format export with several horizons and a preamble line.
pub const LONG_EXPORT: &str = "Forex correlation snapshot (50 bars)\n\
    pair1;pair2;5min;hour;day;week\n\
    EURUSD;USDCHF;-80%;-85%;-95.5%;-97%\n\
    EURUSD;GBPUSD;40%;60%;88%;90%\n\
    AUDUSD;NZDUSD;70%;80%;91%;93%\n\
    GBPJPY;EURJPY;50%;55%;83%;85%\n\
    USDJPY;AUDJPY;10%;20%;47%;50%\n\
    USDCHF;EURUSD;-80%;-85%;-95.5%;-97%\n\
    EURGBP;AUDNZD;1%;2%;n/a;3%\n\
    NZDUSD;NZDUSD;100%;100%;100%;100%\n";

/// Build a square matrix CSV from symbols and a value function.
pub fn matrix_csv(symbols: &[&str], value: impl Fn(usize, usize) -> f64) -> String {
    let mut text = String::from("Pair");
    for s in symbols {
        text.push(',');
        text.push_str(s);
    }
    text.push('\n');
    for (i, row) in symbols.iter().enumerate() {
        text.push_str(row);
        for j in 0..symbols.len() {
            text.push_str(&format!(",{}", value(i, j)));
        }
        text.push('\n');
    }
    text
}

pub const MAJORS: [&str; 6] = ["AUDUSD", "EURUSD", "GBPUSD", "NZDUSD", "USDCHF", "USDJPY"];

/// Symmetric 6x6 matrix with 100 on the diagonal and distinct off-diagonal values.
pub fn majors_matrix() -> String {
    matrix_csv(&MAJORS, |i, j| {
        if i == j {
            100.0
        } else {
            let (lo, hi) = if i < j { (i, j) } else { (j, i) };
            let magnitude = (lo * 6 + hi) as f64 * 2.5;
            if (lo + hi) % 2 == 0 { -magnitude } else { magnitude }
        }
    })
}

pub fn keys(observations: &[Observation]) -> Vec<String> {
    observations.iter().map(Observation::key).collect()
}
