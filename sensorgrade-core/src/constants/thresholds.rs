//! Rating Thresholds
//!
//! Fixed classification limits used by the rating engine. The defaults of
//! [`RatingThresholds`](crate::rating::RatingThresholds) are built from these
//! values; deployments that need different limits construct their own
//! thresholds instead of touching these constants.

// ===== THERMOMETER =====

/// Maximum distance between a thermometer's average reading and the
/// reference temperature (°C).
///
/// A thermometer whose average drifts further than this is rated `precise`
/// regardless of how tight its readings are.
pub const THERMOMETER_AVERAGE_WINDOW_C: f64 = 0.5;

/// Largest sample standard deviation (°C) still rated `ultra precise`.
pub const THERMOMETER_ULTRA_PRECISE_MAX_STD_DEV: f64 = 3.0;

/// Largest sample standard deviation (°C) still rated `very precise`.
///
/// Anything above is rated `precise`.
pub const THERMOMETER_VERY_PRECISE_MAX_STD_DEV: f64 = 5.0;

// ===== HUMIDITY =====

/// Largest relative deviation of any single reading from the reference
/// humidity for the sensor to be `accepted`.
///
/// Expressed as a fraction: 0.01 is 1% of the reference value.
pub const HUMIDITY_MAX_DEVIATION_RATIO: f64 = 0.01;
