//! Reference calibration values
//!
//! The first line of every log carries the values the room was held at
//! while the sensors recorded:
//!
//! ```text
//! reference <temperature> <humidity>
//! ```

use alloc::string::ToString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::format::{REFERENCE_KEYWORD, REFERENCE_TOKEN_COUNT},
    errors::{HeaderError, HeaderResult},
    segmenter::tokenize,
    traits::Validatable,
};

/// Reference temperature and humidity for one calibration run
///
/// Built once from the header line and then only read. Rating threads share
/// it by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceValues {
    temperature: f64,
    humidity: f64,
}

impl ReferenceValues {
    /// Create reference values directly
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Parse the `reference <temperature> <humidity>` header line
    ///
    /// ```rust
    /// use sensorgrade_core::ReferenceValues;
    ///
    /// let reference = ReferenceValues::from_header_line("  reference 70.0 45.0 ")?;
    /// assert_eq!(reference.humidity(), 45.0);
    /// # Ok::<(), sensorgrade_core::HeaderError>(())
    /// ```
    pub fn from_header_line(line: &str) -> HeaderResult<Self> {
        let tokens = tokenize(line).map_err(|found| HeaderError::TokenCount { found })?;
        if tokens.len() != REFERENCE_TOKEN_COUNT {
            return Err(HeaderError::TokenCount {
                found: tokens.len(),
            });
        }

        if tokens[0] != REFERENCE_KEYWORD {
            return Err(HeaderError::NotAReference {
                keyword: tokens[0].to_string(),
            });
        }

        let temperature = parse_reference("temperature", tokens[1])?;
        let humidity = parse_reference("humidity", tokens[2])?;

        Ok(Self::new(temperature, humidity))
    }

    /// Reference temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Reference relative humidity
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Replace the reference temperature
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Replace the reference humidity
    pub fn set_humidity(&mut self, humidity: f64) {
        self.humidity = humidity;
    }
}

fn parse_reference(field: &'static str, token: &str) -> HeaderResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_valid() => Ok(value),
        _ => Err(HeaderError::InvalidNumber {
            field,
            token: token.to_string(),
        }),
    }
}
