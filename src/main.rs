//! # topsis CLI Entry Point
//!
//! Ranks the rows of a CSV table and writes the scored table back out.
//!
//! ```text
//! topsis data.csv "1,1,1,2" "+,+,-,+" result.csv
//! ```
//!
//! Exit code 0 on success, 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use topsis::adapters::{CsvResultWriter, CsvTableReader, JsonResultWriter};
use topsis::application::{RankTableCommand, RankTableHandler};
use topsis::config::{AppConfig, LoggingConfig, OutputFormat};
use topsis::ports::ResultWriter;

/// Rank alternatives with TOPSIS.
///
/// Reads a table whose first column names each alternative and whose
/// remaining columns are numeric criteria, then appends a performance score
/// and a rank (1 = best) to every row.
#[derive(Parser, Debug)]
#[command(name = "topsis", version, about)]
struct Cli {
    /// Input CSV file (identifier column plus at least two criteria)
    input: PathBuf,

    /// Criterion weights, e.g. "1,1,1,2"
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Criterion impacts, '+' to maximise or '-' to minimise, e.g. "+,+,-,+"
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Result file
    output: PathBuf,

    /// Result format (overrides output.format)
    #[arg(long, value_name = "csv|json")]
    format: Option<OutputFormat>,

    /// Fixed decimals for scores (overrides output.precision)
    #[arg(long, value_name = "N")]
    precision: Option<usize>,

    /// CSV delimiter for input and output (overrides input/output.delimiter)
    #[arg(long, value_name = "C")]
    delimiter: Option<char>,

    /// Configuration file (defaults to ./topsis.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from '{}'", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging, cli.verbose);

    let reader = Arc::new(CsvTableReader::with_delimiter(config.input.delimiter_byte()));
    let writer: Arc<dyn ResultWriter> = match config.output.format {
        OutputFormat::Csv => Arc::new(
            CsvResultWriter::new()
                .with_delimiter(config.output.delimiter_byte())
                .with_layout(config.output.layout()),
        ),
        OutputFormat::Json => Arc::new(JsonResultWriter::new()),
    };

    let handler = RankTableHandler::new(reader, writer)
        .with_separator(config.parameters.separator_char());

    let ranked = handler.handle(RankTableCommand {
        input: cli.input,
        output: cli.output.clone(),
        weights: cli.weights,
        impacts: cli.impacts,
    })?;

    println!(
        "Ranked {} alternatives; results saved to '{}'",
        ranked.table.alternative_count(),
        cli.output.display()
    );
    if let Some(best) = ranked.best_alternative() {
        println!("Best alternative: {}", best);
    }

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(precision) = cli.precision {
        config.output.precision = Some(precision);
    }
    if let Some(delimiter) = cli.delimiter {
        config.input.delimiter = delimiter.to_string();
        config.output.delimiter = delimiter.to_string();
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout carries only the summary
    if logging.json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
