// LogMetrics - GPL-3.0-or-later
// This file is part of LogMetrics.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// LogMetrics is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogMetrics is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogMetrics.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use logmetrics::config::AnalyzerConfig;
use logmetrics::core::{load_records, RecordStore};
use logmetrics::output::{self, FormatOptions};
use logmetrics::{export, metrics, LogRecord, MetricsSnapshot, RawRecord, RecordShape};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "logmetrics")]
#[command(version)]
#[command(about = "Extract latency, login, HTTP status and network-event metrics from a log file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate metrics and print them; write one CSV table per category
    Metrics(MetricsArgs),
    /// Parse the log and write its records as JSON Lines
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
struct MetricsArgs {
    /// Path to the log file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Directory for the CSV tables
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Skip writing CSV tables
    #[arg(long)]
    no_csv: bool,

    /// Also write the JSON object to this file
    #[arg(long, value_name = "FILE")]
    json_out: Option<PathBuf>,

    /// Keep the whole message text instead of only its key=value tokens
    #[arg(long)]
    naive: bool,

    /// Add a diagnostics key with skipped-record counts to the JSON
    #[arg(long)]
    diagnostics: bool,

    /// Print nothing to stdout
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Path to the log file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output path (defaults to the input path with a .jsonl extension)
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG to override (e.g., RUST_LOG=debug); reports go to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("logmetrics starting up (version {})", env!("CARGO_PKG_VERSION"));

    match Cli::parse().command {
        Command::Metrics(args) => run_metrics(&args, AnalyzerConfig::load()),
        Command::Parse(args) => run_parse(&args),
    }
}

fn load_snapshot(path: &Path, shape: RecordShape) -> anyhow::Result<MetricsSnapshot> {
    tracing::info!("Using {shape} record shape");
    let snapshot = match shape {
        RecordShape::Fields => {
            let store: RecordStore<LogRecord> = load_records(path)?;
            metrics::aggregate(&store)
        }
        RecordShape::Raw => {
            let store: RecordStore<RawRecord> = load_records(path)?;
            metrics::aggregate(&store)
        }
    };
    Ok(snapshot)
}

fn run_metrics(args: &MetricsArgs, config: AnalyzerConfig) -> anyhow::Result<()> {
    let shape = if args.naive {
        RecordShape::Raw
    } else {
        config.record_shape
    };

    let snapshot = load_snapshot(&args.file, shape)
        .with_context(|| format!("Failed to analyze {}", args.file.display()))?;

    let rendered = output::format(
        &snapshot,
        FormatOptions {
            include_diagnostics: args.diagnostics || config.include_diagnostics,
        },
    )?;

    if !args.quiet {
        println!("{}", rendered.console_text);
        if config.print_json {
            println!("Metrics JSON:");
            println!("{}", rendered.json_text);
        }
    }

    if let Some(json_path) = &args.json_out {
        export::write_json(&rendered.json_text, json_path)?;
    }

    if config.write_csv && !args.no_csv {
        let dir = args
            .out_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        export::write_csv_tables(&rendered.csv_tables, &dir)?;
    }

    Ok(())
}

fn run_parse(args: &ParseArgs) -> anyhow::Result<()> {
    let store: RecordStore<LogRecord> = load_records(&args.file)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| export::default_jsonl_path(&args.file));
    export::write_json_lines(store.records(), &output)?;
    Ok(())
}
