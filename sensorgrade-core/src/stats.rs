//! Descriptive Statistics for Sensor Readings
//!
//! ## Overview
//!
//! Pure functions over a slice of readings. Sensor records delegate to these,
//! and the rating engine only ever sees their results.
//!
//! ## Empty and Single-Reading Series
//!
//! A sensor may legitimately report no readings (a header followed directly by
//! another header). Every function here has a defined value for that case
//! instead of returning NaN:
//!
//! ```text
//! values      mean   sample_std_dev   max_relative_deviation
//! []          0      0                0
//! [x]         x      0                |r - x| / r
//! ```
//!
//! ## Sample vs Population Deviation
//!
//! Calibration readings are a sample of the sensor's behaviour, not the whole
//! population, so the deviation uses the unbiased `n - 1` denominator:
//!
//! ```text
//! s = sqrt( Σ (x_i - mean)² / (n - 1) )
//! ```
//!
//! ## Relative Deviation
//!
//! `|r - x| / r` is not guarded against `r == 0`. The division follows IEEE
//! rules and yields infinity (or NaN for `x == 0`), which the caller sees as
//! is.

/// Absolute distance between a reference value and a reading
pub fn deviation(reference: f64, value: f64) -> f64 {
    libm::fabs(reference - value)
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Sample standard deviation, `0.0` when fewer than two readings exist
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }

    let avg = mean(values);
    let squares: f64 = values
        .iter()
        .map(|value| {
            let delta = value - avg;
            delta * delta
        })
        .sum();

    libm::sqrt(squares / (n - 1) as f64)
}

/// Largest `|reference - x| / reference` over all readings, `0.0` when empty
pub fn max_relative_deviation(values: &[f64], reference: f64) -> f64 {
    values.iter().fold(0.0, |max, &value| {
        let relative = deviation(reference, value) / reference;
        if relative > max {
            relative
        } else {
            max
        }
    })
}
