//! Log Segmentation
//!
//! ## Overview
//!
//! Turns the lines after the reference header into one [`SensorRecord`] per
//! sensor block. Lines are classified purely by their token count:
//!
//! ```text
//! tokens  shape                          meaning
//! 2       <kind> <name>                  sensor header
//! 3       <timestamp> <name> <value>     reading
//! other   -                              ignored
//! ```
//!
//! ## State Machine
//!
//! ```text
//!                    2 tokens (open record)
//!   ExpectingHeader ───────────────────────► ExpectingData ──┐
//!     │  ▲                                     │  ▲          │ 2 tokens:
//!     └──┘ 3 tokens: orphan reading, dropped   └──┘          │ flush current,
//!                                              3 tokens:     │ open next
//!                                              append value  │
//!                                                     ▲──────┘
//! ```
//!
//! A sensor's readings are always contiguous: the next header closes the
//! previous block. Segmentation therefore only needs the current line and
//! the open record, never an index of sensors by name. Two headers with the
//! same name produce two independent records.
//!
//! ## Recoverable Errors
//!
//! A reading for a different sensor, or with a value that does not parse
//! as a finite number (`NaN` and `inf` included), is logged at `warn`, counted in [`SegmenterStats`] and dropped. Nothing
//! in this module is fatal.

use alloc::string::ToString;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::format::{DATA_TOKEN_COUNT, HEADER_TOKEN_COUNT},
    errors::DataLineError,
    sensor::SensorRecord,
    traits::Validatable,
};

/// Most tokens any line of the log can carry
pub const MAX_LINE_TOKENS: usize = 3;

/// Tokens of one line, stored inline
pub type LineTokens<'a> = heapless::Vec<&'a str, MAX_LINE_TOKENS>;

/// Split a line on whitespace, ignoring leading and trailing whitespace
///
/// Returns `Err(count)` with the total token count when the line has more
/// than [`MAX_LINE_TOKENS`] tokens.
pub fn tokenize(line: &str) -> Result<LineTokens<'_>, usize> {
    let mut tokens = LineTokens::new();
    for token in line.split_whitespace() {
        if tokens.push(token).is_err() {
            return Err(line.split_whitespace().count());
        }
    }
    Ok(tokens)
}

/// Where the segmenter is in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterState {
    /// No sensor is open yet; readings are orphans
    ExpectingHeader,
    /// A sensor is open and collecting readings
    ExpectingData,
}

/// Counters for one segmentation run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SegmenterStats {
    /// Lines fed to the segmenter
    pub lines_processed: usize,
    /// Sensor headers seen
    pub headers: usize,
    /// Readings appended to a record
    pub readings: usize,
    /// Readings seen before any header
    pub orphan_lines: usize,
    /// Readings naming a sensor other than the open one
    pub name_mismatches: usize,
    /// Readings whose value did not parse
    pub parse_errors: usize,
    /// Lines with neither 2 nor 3 tokens
    pub ignored_lines: usize,
}

/// Line-by-line sensor block segmenter
///
/// ```rust
/// use sensorgrade_core::LogSegmenter;
///
/// let mut segmenter = LogSegmenter::new();
/// for line in ["thermometer temp-1", "2007-04-05T22:00 temp-1 72.4"] {
///     segmenter.feed(line);
/// }
/// let sensors = segmenter.finish();
/// assert_eq!(sensors[0].values(), &[72.4]);
/// ```
#[derive(Debug, Default)]
pub struct LogSegmenter {
    current: Option<SensorRecord>,
    records: Vec<SensorRecord>,
    stats: SegmenterStats,
}

impl LogSegmenter {
    /// Create a segmenter waiting for its first header
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> SegmenterState {
        if self.current.is_some() {
            SegmenterState::ExpectingData
        } else {
            SegmenterState::ExpectingHeader
        }
    }

    /// Statistics so far
    pub fn stats(&self) -> &SegmenterStats {
        &self.stats
    }

    /// Consume one line
    ///
    /// Returns the recoverable error, if any, that caused the line to be
    /// dropped. The error has already been logged.
    pub fn feed(&mut self, line: &str) -> Option<DataLineError> {
        self.stats.lines_processed += 1;

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(_) => {
                self.stats.ignored_lines += 1;
                return None;
            }
        };

        match tokens.len() {
            HEADER_TOKEN_COUNT => {
                self.open(tokens[0], tokens[1]);
                None
            }
            DATA_TOKEN_COUNT => self.reading(tokens[1], tokens[2]),
            _ => {
                self.stats.ignored_lines += 1;
                None
            }
        }
    }

    /// Flush the open record and return all records in header order
    pub fn finish(self) -> Vec<SensorRecord> {
        self.finish_with_stats().0
    }

    /// Like [`finish`](Self::finish), also handing back the counters
    pub fn finish_with_stats(mut self) -> (Vec<SensorRecord>, SegmenterStats) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }

        log_debug!(
            "Segmented {} sensors from {} lines ({} readings, {} dropped)",
            self.records.len(),
            self.stats.lines_processed,
            self.stats.readings,
            self.stats.orphan_lines + self.stats.name_mismatches + self.stats.parse_errors
        );

        (self.records, self.stats)
    }

    fn open(&mut self, kind: &str, name: &str) {
        if let Some(previous) = self.current.take() {
            self.records.push(previous);
        }

        self.stats.headers += 1;
        let record = SensorRecord::new(kind, name);
        if !record.kind().is_recognized() {
            log_warn!("Sensor {} has unrecognized kind '{}'", name, kind);
        }
        self.current = Some(record);
    }

    fn reading(&mut self, name: &str, value: &str) -> Option<DataLineError> {
        let Some(record) = self.current.as_mut() else {
            self.stats.orphan_lines += 1;
            return None;
        };

        if name != record.name() {
            self.stats.name_mismatches += 1;
            let err = DataLineError::NameMismatch {
                expected: record.name().to_string(),
                found: name.to_string(),
            };
            log_warn!("{}", err);
            return Some(err);
        }

        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_valid() => {
                record.push_value(parsed);
                self.stats.readings += 1;
                None
            }
            _ => {
                self.stats.parse_errors += 1;
                let err = DataLineError::InvalidValue {
                    sensor: record.name().to_string(),
                    token: value.to_string(),
                };
                log_warn!("{}", err);
                Some(err)
            }
        }
    }
}

/// Segment a whole sequence of lines
pub fn segment_lines<I, S>(lines: I) -> Vec<SensorRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = LogSegmenter::new();
    for line in lines {
        segmenter.feed(line.as_ref());
    }
    segmenter.finish()
}
