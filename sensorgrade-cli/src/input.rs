//! Log input
//!
//! Operators usually paste the log into a terminal, so input ends at a line
//! holding only the Ctrl+] control byte. End of stream ends it as well.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use sensorgrade_core::constants::END_OF_LOG_SENTINEL;

use crate::error::CliError;

/// Whether `line` is the end-of-log sentinel
fn is_sentinel(line: &str) -> bool {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.as_bytes() == [END_OF_LOG_SENTINEL]
}

/// Collect lines until the sentinel line or end of stream
pub fn read_log<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_sentinel(&line) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read the log from a file
pub fn read_log_file(path: &Path) -> Result<Vec<String>, CliError> {
    let file = File::open(path).map_err(|source| CliError::ReadLog {
        path: path.to_path_buf(),
        source,
    })?;

    read_log(BufReader::new(file)).map_err(|source| CliError::ReadLog {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the log from stdin, prompting when a person is typing
pub fn read_log_stdin() -> Result<Vec<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stderr = io::stderr();
        // A failed prompt is cosmetic
        let _ = writeln!(stderr, "Enter log content:");
    }

    read_log(stdin.lock()).map_err(CliError::Stdin)
}
