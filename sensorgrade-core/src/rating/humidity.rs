//! Humidity rating
//!
//! Only the worst reading matters: one reading outside the tolerance rejects
//! the sensor.

use super::{Rating, RatingThresholds};
use crate::sensor::SensorRecord;

pub(super) fn rate(sensor: &SensorRecord, reference: f64, limits: &RatingThresholds) -> Rating {
    if sensor.max_deviation_percentage(reference) <= limits.humidity_max_deviation {
        Rating::Accepted
    } else {
        Rating::Rejected
    }
}
