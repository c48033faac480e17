//! CLI entry point for the weather day-summary tool.
//!
//! Loads a batch of hourly observations from disk, merges optional weight
//! and threshold overrides, and reports the aggregated day summary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_summary::{
    AnalyzerConfig, ConditionAggregator,
    input::load_observations,
    output::{SummaryRecord, append_record, print_json, print_pretty},
};

#[derive(Parser)]
#[command(name = "weather_summary")]
#[command(about = "Summarize a day of hourly weather observations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a CSV or JSON file of hourly observations
    Analyze {
        /// Path to the observation file
        #[arg(value_name = "FILE")]
        source: String,

        /// JSON file with weight and threshold overrides
        #[arg(short, long)]
        config: Option<String>,

        /// How to report the summary
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// CSV file to append a summary row to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the built-in weight and threshold tables as JSON
    Defaults,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/weather_summary.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("weather_summary.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            config,
            format,
            output,
        } => {
            analyze_file(&source, config.as_deref(), format, output.as_deref())?;
        }
        Commands::Defaults => {
            info!(
                "{}",
                serde_json::to_string_pretty(&AnalyzerConfig::default())?
            );
        }
    }

    Ok(())
}

/// Runs one analysis end to end and reports it.
#[tracing::instrument(skip(format))]
fn analyze_file(
    source: &str,
    config: Option<&str>,
    format: Format,
    output: Option<&str>,
) -> Result<()> {
    let batch = load_observations(source)?;

    let mut aggregator = ConditionAggregator::from_batch(batch, AnalyzerConfig::default())
        .with_context(|| format!("cannot analyze {source}"))?;

    if let Some(path) = config {
        let overrides = AnalyzerConfig::from_json_file(path)?;
        aggregator.apply_config(&overrides);
    }

    let result = aggregator.analyze()?;
    print_pretty(&result);

    match format {
        Format::Text => info!("{}", result.description),
        Format::Json => print_json(&result)?,
    }

    if let Some(path) = output {
        let record = SummaryRecord::from_result(source, aggregator.observations().len(), &result);
        append_record(path, &record)?;
        info!(path, "Summary row appended");
    }

    Ok(())
}
