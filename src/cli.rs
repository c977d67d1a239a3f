//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_source::FileSource;
use crate::adapters::ini_config_adapter::IniConfigAdapter;
use crate::adapters::text_report::TextReport;
use crate::domain::base_filter::{parse_base_filter, BaseFilter};
use crate::domain::basket::{default_symbols, parse_symbols, snapshot_url, DEFAULT_PERIOD};
use crate::domain::config_validation::{validate_ranking_config, validate_source_config};
use crate::domain::error::CorrelationError;
use crate::domain::pipeline::{self, RankReport};
use crate::domain::ranking::DEFAULT_TOP_N;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::source_port::SourcePort;

#[derive(Parser, Debug)]
#[command(name = "corrtop", about = "Rank the strongest pairwise correlations in a CSV export")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank the strongest correlations in a CSV export
    Rank {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// CSV file, or `-` for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Restrict to a currency (NZD) or pair (NZDUSD)
        #[arg(short, long)]
        base: Option<String>,
        /// Number of pairs to show
        #[arg(short = 'n', long)]
        top: Option<usize>,
        /// List cells that could not be used
        #[arg(long)]
        show_skipped: bool,
    },
    /// Show how a base filter is interpreted
    Base { text: String },
    /// Print the snapshot download URL
    Url {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        period: Option<u32>,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct RankOverrides {
    pub input: Option<PathBuf>,
    pub base: Option<String>,
    pub top: Option<usize>,
    pub show_skipped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    pub input: PathBuf,
    pub base: String,
    pub top_n: usize,
    pub show_skipped: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Rank {
            config,
            input,
            base,
            top,
            show_skipped,
        } => {
            let overrides = RankOverrides {
                input,
                base,
                top,
                show_skipped,
            };
            run_rank(config.as_deref(), &overrides)
        }
        Command::Base { text } => run_base(&text),
        Command::Url { config, period } => run_url(config.as_deref(), period),
    }
}

pub fn load_config(path: &Path) -> Result<IniConfigAdapter, ExitCode> {
    IniConfigAdapter::from_file(path).map_err(|e| {
        let err = CorrelationError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn load_optional_config(path: Option<&Path>) -> Result<IniConfigAdapter, ExitCode> {
    match path {
        Some(p) => {
            eprintln!("Loading config from {}", p.display());
            load_config(p)
        }
        None => Ok(IniConfigAdapter::empty()),
    }
}

pub fn build_rank_config(
    config: &dyn ConfigPort,
    overrides: &RankOverrides,
) -> Result<RankConfig, CorrelationError> {
    let input = match &overrides.input {
        Some(path) => path.clone(),
        None => config
            .get_string("input", "path")
            .map(PathBuf::from)
            .ok_or_else(|| CorrelationError::ConfigMissing {
                section: "input".into(),
                key: "path".into(),
            })?,
    };

    let base = overrides
        .base
        .clone()
        .or_else(|| config.get_string("ranking", "base"))
        .unwrap_or_default();

    let top_n = match overrides.top {
        Some(n) => n,
        None => usize::try_from(config.get_int("ranking", "top_n", DEFAULT_TOP_N as i64))
            .unwrap_or(0),
    };
    if top_n == 0 {
        return Err(CorrelationError::ConfigInvalid {
            section: "ranking".into(),
            key: "top_n".into(),
            reason: "top_n must be at least 1".into(),
        });
    }

    Ok(RankConfig {
        input,
        base,
        top_n,
        show_skipped: overrides.show_skipped || config.get_bool("report", "show_skipped", false),
    })
}

/// Read, rank, and present one request through the given ports.
pub fn run_rank_pipeline(
    source: &dyn SourcePort,
    config: &RankConfig,
    reporter: &dyn ReportPort,
    out: &mut dyn Write,
) -> Result<RankReport, CorrelationError> {
    let text = source.read_text()?;
    eprintln!("Read {} chars from {}", text.len(), source.describe());

    let report = pipeline::run(&text, &config.base, config.top_n)?;
    reporter.write(&report, out)?;
    Ok(report)
}

fn run_rank(config_path: Option<&Path>, overrides: &RankOverrides) -> ExitCode {
    let adapter = match load_optional_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_ranking_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let rank_config = match build_rank_config(&adapter, overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let source = FileSource::new(&rank_config.input);
    let reporter = TextReport::new(rank_config.show_skipped);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_rank_pipeline(&source, &rank_config, &reporter, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_base(text: &str) -> ExitCode {
    match parse_base_filter(text).into_valid() {
        Ok(BaseFilter::None) => {
            println!("none (all pairs)");
            ExitCode::SUCCESS
        }
        Ok(filter) => {
            println!("{filter}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Resolve the snapshot URL from config, with an optional period override.
pub fn build_snapshot_url(
    config: &dyn ConfigPort,
    period_override: Option<u32>,
) -> Result<String, CorrelationError> {
    let period = match period_override {
        Some(p) => p,
        None => u32::try_from(config.get_int("source", "period", i64::from(DEFAULT_PERIOD)))
            .unwrap_or(0),
    };
    if period == 0 {
        return Err(CorrelationError::ConfigInvalid {
            section: "source".into(),
            key: "period".into(),
            reason: "period must be a positive number of bars".into(),
        });
    }

    let symbols = match config.get_string("source", "symbols") {
        Some(list) => parse_symbols(&list)?,
        None => default_symbols(),
    };

    Ok(snapshot_url(period, &symbols))
}

fn run_url(config_path: Option<&Path>, period: Option<u32>) -> ExitCode {
    let adapter = match load_optional_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_source_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    match build_snapshot_url(&adapter, period) {
        Ok(url) => {
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
