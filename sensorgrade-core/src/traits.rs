//! Core traits
//!
//! Kept small: a validity check for parsed numbers and the seam between the
//! rating engine and whoever drives it.

use crate::rating::Rating;
use crate::reference::ReferenceValues;
use crate::sensor::SensorRecord;

/// Classifies one sensor against the reference values
///
/// Implementations must be pure: the same record and reference always give
/// the same label. The coordinator calls `rate` from several threads at once.
pub trait Rater {
    /// Compute the rating label for `sensor`
    fn rate(&self, sensor: &SensorRecord, reference: &ReferenceValues) -> Rating;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(70.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }
}
