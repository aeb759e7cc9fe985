//! CLI for SensorGrade: paste a calibration log, get one rating per sensor.

mod error;
mod input;
mod output;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{debug, info, warn};
use sensorgrade_core::{evaluate_log, RatingEngine, RatingThresholds};

use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "sensorgrade")]
#[command(about = "Rate thermometers and humidity sensors against a reference calibration")]
#[command(version = sensorgrade_core::VERSION)]
struct Cli {
    /// Read the log from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// JSON file overriding rating thresholds (missing fields keep defaults)
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let thresholds = match &cli.thresholds {
        Some(path) => load_thresholds(path)?,
        None => RatingThresholds::default(),
    };

    let lines = match &cli.input {
        Some(path) => input::read_log_file(path)?,
        None => input::read_log_stdin()?,
    };
    info!("Read {} lines", lines.len());

    let engine = RatingEngine::new(thresholds);
    debug!("Rating with {:?}", engine.thresholds());

    let run = evaluate_log(&lines, &engine)?;
    info!(
        "Ref. temperature is {} | Ref. humidity is {}",
        run.reference.temperature(),
        run.reference.humidity()
    );

    if run.sensors.is_empty() {
        return Err(CliError::NoSensorContent);
    }
    info!("Found {} sensors", run.sensors.len());

    if !run.summary.is_complete() {
        warn!("{} sensors could not be rated", run.summary.failed.len());
    }

    let stdout = io::stdout();
    output::write_run(&mut stdout.lock(), &run, cli.format).map_err(CliError::Output)
}

fn load_thresholds(path: &Path) -> Result<RatingThresholds, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadThresholds {
        path: path.to_path_buf(),
        source,
    })?;

    let thresholds: RatingThresholds = serde_json::from_str(&text).map_err(|source| CliError::ParseThresholds {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Using thresholds {:?}", thresholds);
    Ok(thresholds)
}
