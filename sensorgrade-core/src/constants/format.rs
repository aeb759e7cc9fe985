//! Calibration Log Format
//!
//! Literals that make up the line-oriented log:
//!
//! ```text
//! reference 70.0 45.0
//! thermometer temp-1
//! 2007-04-05T22:00 temp-1 72.4
//! humidity hum-1
//! 2007-04-05T22:04 hum-1 45.2
//! ```

/// Keyword opening the reference header line.
pub const REFERENCE_KEYWORD: &str = "reference";

/// Tokens on the reference header line: keyword, temperature, humidity.
pub const REFERENCE_TOKEN_COUNT: usize = 3;

/// Tokens on a sensor header line: kind, name.
pub const HEADER_TOKEN_COUNT: usize = 2;

/// Tokens on a data line: timestamp, name, value.
pub const DATA_TOKEN_COUNT: usize = 3;

/// Kind tag for temperature sensors.
pub const THERMOMETER_TAG: &str = "thermometer";

/// Kind tag for relative humidity sensors.
pub const HUMIDITY_TAG: &str = "humidity";

/// Control byte (Ctrl+]) that ends interactive input when alone on a line.
pub const END_OF_LOG_SENTINEL: u8 = 0x1D;
