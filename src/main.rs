#![forbid(unsafe_code)]

mod clock;
mod constants;
mod gui;
mod ingest;
mod seed;
mod state;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

/// Single-page profile for DINO LOGGER
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// JSON file with the initial profile (camelCase keys, all optional)
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Print the built-in seed profile as JSON and exit
    #[arg(long)]
    print_seed: bool,
}

fn parse_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_seed {
        println!("{}", seed::default_json()?);
        return Ok(());
    }

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .map(|value| parse_level(&value))
        .unwrap_or(TraceLevel::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let profile = seed::load(cli.seed.as_deref())?;
    info!(username = %profile.username, "Starting profile page");

    gui::run_gui(profile)
}
