//! Sensor records
//!
//! A record is opened by a header line (`<kind> <name>`), filled with the
//! readings that follow it, and rated once segmentation is done.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::format::{HUMIDITY_TAG, THERMOMETER_TAG},
    rating::Rating,
    stats,
};

/// Sensor kind taken from the header tag
///
/// Only thermometers and humidity sensors can be rated. Any other tag is kept
/// verbatim so the rating can name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "String"))]
pub enum SensorKind {
    /// `thermometer`
    Thermometer,
    /// `humidity`
    Humidity,
    /// Anything else
    Unrecognized(String),
}

impl SensorKind {
    /// Classify a header tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            THERMOMETER_TAG => SensorKind::Thermometer,
            HUMIDITY_TAG => SensorKind::Humidity,
            other => SensorKind::Unrecognized(other.to_string()),
        }
    }

    /// The tag as written in the log
    pub fn as_str(&self) -> &str {
        match self {
            SensorKind::Thermometer => THERMOMETER_TAG,
            SensorKind::Humidity => HUMIDITY_TAG,
            SensorKind::Unrecognized(tag) => tag.as_str(),
        }
    }

    /// Whether the rating engine knows how to classify this kind
    pub fn is_recognized(&self) -> bool {
        !matches!(self, SensorKind::Unrecognized(_))
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SensorKind> for String {
    fn from(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Unrecognized(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// One sensor's identity, readings and (eventually) rating
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SensorRecord {
    kind: SensorKind,
    name: String,
    values: Vec<f64>,
    rating: Option<Rating>,
}

impl SensorRecord {
    /// Open an empty record from a header's kind tag and name
    pub fn new(kind: &str, name: &str) -> Self {
        Self {
            kind: SensorKind::from_tag(kind),
            name: name.to_string(),
            values: Vec::new(),
            rating: None,
        }
    }

    /// Sensor kind
    pub fn kind(&self) -> &SensorKind {
        &self.kind
    }

    /// Sensor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Readings in the order they appeared in the log
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Append a reading
    pub fn push_value(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Mean of the readings, `0.0` if there are none
    pub fn average(&self) -> f64 {
        stats::mean(&self.values)
    }

    /// Sample standard deviation, `0.0` with fewer than two readings
    pub fn standard_deviation(&self) -> f64 {
        stats::sample_std_dev(&self.values)
    }

    /// Largest relative deviation of a reading from `reference`
    pub fn max_deviation_percentage(&self, reference: f64) -> f64 {
        stats::max_relative_deviation(&self.values, reference)
    }

    /// Rating, once assigned
    pub fn rating(&self) -> Option<&Rating> {
        self.rating.as_ref()
    }

    /// Store the rating if none is set yet and return the stored one
    ///
    /// The first assignment wins; later calls leave it untouched.
    pub fn set_rating(&mut self, rating: Rating) -> &Rating {
        self.rating.get_or_insert(rating)
    }
}
