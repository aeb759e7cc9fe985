//! Thermometer rating
//!
//! Bias is checked before spread: a thermometer that reads consistently but
//! sits off the reference is only `precise`.

use super::{Rating, RatingThresholds};
use crate::{sensor::SensorRecord, stats};

pub(super) fn rate(sensor: &SensorRecord, reference: f64, limits: &RatingThresholds) -> Rating {
    let bias = stats::deviation(reference, sensor.average());
    if bias > limits.temperature_average_window {
        return Rating::Precise;
    }

    let spread = sensor.standard_deviation();
    if spread <= limits.ultra_precise_max_std_dev {
        Rating::UltraPrecise
    } else if spread <= limits.very_precise_max_std_dev {
        Rating::VeryPrecise
    } else {
        Rating::Precise
    }
}
