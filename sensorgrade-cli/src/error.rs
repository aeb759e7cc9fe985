//! CLI error type
//!
//! Every variant ends the run with exit code 1.

use std::io;
use std::path::PathBuf;

use sensorgrade_core::HeaderError;
use thiserror::Error;

/// Failures that stop the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Log file could not be read
    #[error("cannot read log file {}: {source}", path.display())]
    ReadLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read
    #[error("cannot read log from stdin: {0}")]
    Stdin(#[source] io::Error),

    /// Threshold file missing or unreadable
    #[error("cannot read thresholds file {}: {source}", path.display())]
    ReadThresholds {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Threshold file is not valid JSON for `RatingThresholds`
    #[error("invalid thresholds file {}: {source}", path.display())]
    ParseThresholds {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reference header missing or malformed
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Header was fine but no sensor block followed
    #[error("No content found for sensors, exiting now")]
    NoSensorContent,

    /// Results could not be written
    #[error("cannot write results: {0}")]
    Output(#[source] io::Error),
}
