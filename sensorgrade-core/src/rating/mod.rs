//! Sensor Accuracy Rating
//!
//! ## Overview
//!
//! The rating engine maps a finished sensor record and the reference values
//! to a single label. It is a pure function: no state is kept between calls,
//! so rating the same record twice, or from several threads at once, always
//! gives the same answer.
//!
//! ## Classification Rules
//!
//! ### Thermometer
//! A thermometer is judged first on bias, then on spread:
//!
//! ```text
//! |mean - reference.temperature| > 0.5  -> precise
//! sample std dev <= 3                   -> ultra precise
//! sample std dev <= 5                   -> very precise
//! otherwise                             -> precise
//! ```
//!
//! ### Humidity
//! A humidity sensor is judged on its single worst reading:
//!
//! ```text
//! max |reference.humidity - x| / reference.humidity <= 0.01 -> accepted
//! otherwise                                                 -> rejected
//! ```
//!
//! ### Anything Else
//! An unrecognized kind gets [`Rating::InvalidSensorType`]. This is a normal
//! outcome for a malformed log, not a failure, so the rest of the batch is
//! still rated.
//!
//! ## Customization
//!
//! ```rust
//! use sensorgrade_core::{RatingEngine, RatingThresholds, ReferenceValues, SensorRecord, Rater};
//!
//! // Lab bench with a tighter humidity tolerance
//! let engine = RatingEngine::new(RatingThresholds::new_with_limits(0.5, 3.0, 5.0, 0.005));
//!
//! let mut sensor = SensorRecord::new("humidity", "hum-1");
//! sensor.push_value(45.3);
//!
//! // 0.3 / 45.0 is within 1% but not within 0.5%
//! let rating = engine.rate(&sensor, &ReferenceValues::new(70.0, 45.0));
//! assert_eq!(rating.to_string(), "rejected");
//! ```

mod humidity;
mod thermometer;

use alloc::string::{String, ToString};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::{
        HUMIDITY_MAX_DEVIATION_RATIO, THERMOMETER_AVERAGE_WINDOW_C,
        THERMOMETER_ULTRA_PRECISE_MAX_STD_DEV, THERMOMETER_VERY_PRECISE_MAX_STD_DEV,
    },
    reference::ReferenceValues,
    sensor::{SensorKind, SensorRecord},
    traits::Rater,
};

/// Classification label attached to a sensor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "String"))]
pub enum Rating {
    /// Thermometer: unbiased and standard deviation within 3
    UltraPrecise,
    /// Thermometer: unbiased and standard deviation within 5
    VeryPrecise,
    /// Thermometer: biased or noisy
    Precise,
    /// Humidity: every reading within tolerance
    Accepted,
    /// Humidity: at least one reading out of tolerance
    Rejected,
    /// Kind tag the engine cannot classify
    InvalidSensorType(String),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::UltraPrecise => f.write_str("ultra precise"),
            Rating::VeryPrecise => f.write_str("very precise"),
            Rating::Precise => f.write_str("precise"),
            Rating::Accepted => f.write_str("accepted"),
            Rating::Rejected => f.write_str("rejected"),
            Rating::InvalidSensorType(kind) => write!(f, "invalid sensor type: {kind}"),
        }
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.to_string()
    }
}

/// Classification limits used by [`RatingEngine`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RatingThresholds {
    /// Largest allowed |mean - reference temperature| before a thermometer
    /// is considered biased
    pub temperature_average_window: f64,

    /// Largest standard deviation rated `ultra precise`
    pub ultra_precise_max_std_dev: f64,

    /// Largest standard deviation rated `very precise`
    pub very_precise_max_std_dev: f64,

    /// Largest relative deviation of any humidity reading still `accepted`
    pub humidity_max_deviation: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            temperature_average_window: THERMOMETER_AVERAGE_WINDOW_C,
            ultra_precise_max_std_dev: THERMOMETER_ULTRA_PRECISE_MAX_STD_DEV,
            very_precise_max_std_dev: THERMOMETER_VERY_PRECISE_MAX_STD_DEV,
            humidity_max_deviation: HUMIDITY_MAX_DEVIATION_RATIO,
        }
    }
}

impl RatingThresholds {
    /// Create thresholds with custom limits
    pub fn new_with_limits(
        average_window: f64,
        ultra_precise_std_dev: f64,
        very_precise_std_dev: f64,
        humidity_max_deviation: f64,
    ) -> Self {
        let ultra = libm::fabs(ultra_precise_std_dev);
        let very = libm::fabs(very_precise_std_dev);
        // The ultra band must sit inside the very band
        let (ultra, very) = if ultra > very { (very, ultra) } else { (ultra, very) };

        Self {
            temperature_average_window: libm::fabs(average_window),
            ultra_precise_max_std_dev: ultra,
            very_precise_max_std_dev: very,
            humidity_max_deviation: libm::fabs(humidity_max_deviation),
        }
    }
}

/// Rates sensors against reference values with fixed thresholds
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    thresholds: RatingThresholds,
}

impl RatingEngine {
    /// Engine using the given thresholds
    pub fn new(thresholds: RatingThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &RatingThresholds {
        &self.thresholds
    }
}

impl Rater for RatingEngine {
    fn rate(&self, sensor: &SensorRecord, reference: &ReferenceValues) -> Rating {
        match sensor.kind() {
            SensorKind::Thermometer => {
                thermometer::rate(sensor, reference.temperature(), &self.thresholds)
            }
            SensorKind::Humidity => humidity::rate(sensor, reference.humidity(), &self.thresholds),
            SensorKind::Unrecognized(tag) => Rating::InvalidSensorType(tag.clone()),
        }
    }
}
