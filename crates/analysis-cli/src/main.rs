//! buy-signal: buy-worthiness analysis of daily price histories.
//!
//! Commands:
//! - `analyze`: full report (technical, fundamental, judgment, risk) for one instrument
//! - `indicators`: every indicator series for one instrument
//! - `screen`: rank several instruments by composite score

use std::path::{Path, PathBuf};
use std::sync::Arc;

use analysis_core::InstrumentInput;
use analysis_orchestrator::{AnalysisConfig, AnalysisOrchestrator, Screener, ScreenerFilters};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use technical_analysis::compute_indicators;

#[derive(Parser)]
#[command(name = "buy-signal", about = "Technical and fundamental buy-worthiness analysis")]
struct Cli {
    /// Print single-line JSON.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one instrument JSON file.
    Analyze {
        file: PathBuf,

        /// Reject histories shorter than the full lookback instead of running simplified analysis.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Print the full indicator series for one instrument JSON file.
    Indicators { file: PathBuf },
    /// Rank instruments from one or more JSON files (each holding one instrument or an array).
    Screen {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of entries to return. Overrides SCREENER_LIMIT.
        #[arg(long)]
        limit: Option<usize>,

        /// Minimum composite score. Overrides SCREENER_MIN_SCORE.
        #[arg(long)]
        min_score: Option<u8>,

        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

fn load_instruments(path: &Path) -> Result<Vec<InstrumentInput>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))?;

    let instruments = if value.is_array() {
        serde_json::from_value::<Vec<InstrumentInput>>(value)
    } else {
        serde_json::from_value::<InstrumentInput>(value).map(|instrument| vec![instrument])
    };
    let instruments = instruments.with_context(|| format!("invalid instrument data in {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = instruments.len(), "loaded instruments");
    Ok(instruments)
}

fn load_instrument(path: &Path) -> Result<InstrumentInput> {
    let mut instruments = load_instruments(path)?;
    match instruments.len() {
        1 => Ok(instruments.remove(0)),
        n => anyhow::bail!("{} holds {n} instruments, expected exactly one", path.display()),
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn init_tracing() {
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the JSON result
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = AnalysisConfig::from_env().context("invalid analysis configuration")?;

    match cli.command {
        Commands::Analyze { file, strict } => {
            if strict {
                config.allow_simplified = false;
            }
            let instrument = load_instrument(&file)?;
            let orchestrator = AnalysisOrchestrator::new(config);
            let report = orchestrator
                .analyze_instrument(&instrument)
                .with_context(|| format!("analysis of {} failed", instrument.symbol))?;
            print_json(&report, cli.compact)?;
        }
        Commands::Indicators { file } => {
            let instrument = load_instrument(&file)?;
            let series = compute_indicators(&instrument.prices);
            print_json(
                &serde_json::json!({
                    "symbol": instrument.symbol,
                    "points": instrument.prices.len(),
                    "indicators": series,
                }),
                cli.compact,
            )?;
        }
        Commands::Screen {
            files,
            limit,
            min_score,
            strict,
        } => {
            if strict {
                config.allow_simplified = false;
            }
            if let Some(limit) = limit {
                config.screener_limit = limit;
            }
            if let Some(min_score) = min_score {
                config.screener_min_score = min_score;
            }
            config.validate().context("invalid screener options")?;

            let mut instruments = Vec::new();
            for file in &files {
                instruments.extend(load_instruments(file)?);
            }

            let filters = ScreenerFilters::from(&config);
            let screener = Screener::new(Arc::new(AnalysisOrchestrator::new(config)));
            let result = screener.screen(&instruments, &filters);
            print_json(&result, cli.compact)?;
        }
    }

    Ok(())
}
