mod engine;
mod loader;
mod models;
mod report;
mod summary;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{Pipeline, PipelineConfig, PipelineReport};
use crate::report::write_report;
use crate::summary::DEFAULT_TOP_N;

/// Summarize a ledger of financial transactions
#[derive(Parser, Debug)]
#[command(name = "ledger-summary", version)]
struct Args {
    /// Transactions CSV with date, amount, type and customer_id columns
    input: PathBuf,

    /// Number of customers in the top customers table
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N, allow_negative_numbers = true)]
    top: i64,

    /// Log level written to stderr: error, warn, info, debug or trace
    #[arg(long, env = "LEDGER_LOG_LEVEL", default_value = "error", value_parser = parse_log_level)]
    log_level: LevelFilter
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let config = PipelineConfig::new(args.input).with_top_n(args.top);
    info!("Summarizing [{}] with top [{}] customers", config.source().display(), config.top_n());

    let pipeline = Pipeline::new(config);

    let timer = Instant::now();
    let report = pipeline.run().await?;
    let duration = timer.elapsed();

    info!("Summarized transactions in: {duration:?}");

    write_report_to_stdout(&report)?;

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}', expected one of error, warn, info, debug, trace"))
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries the report
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(report: &PipelineReport) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    write_report(&mut output, report)
}
