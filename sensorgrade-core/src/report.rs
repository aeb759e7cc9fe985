//! Calibration report
//!
//! Flat, serializable view of a rated run: per sensor the statistics the
//! rating was based on, plus the segmentation counters.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    rating::Rating,
    reference::ReferenceValues,
    segmenter::SegmenterStats,
    sensor::{SensorKind, SensorRecord},
};

/// Statistics and rating for one sensor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SensorReport {
    /// Sensor name
    pub name: String,
    /// Sensor kind
    pub kind: SensorKind,
    /// Number of readings kept
    pub readings: usize,
    /// Mean reading
    pub average: f64,
    /// Sample standard deviation
    pub standard_deviation: f64,
    /// Worst relative deviation against the reference value for this kind,
    /// absent for unrecognized kinds
    pub max_deviation_percentage: Option<f64>,
    /// Rating, absent if it could not be computed
    pub rating: Option<Rating>,
}

impl SensorReport {
    /// Summarize a record against the reference values
    pub fn from_record(record: &SensorRecord, reference: &ReferenceValues) -> Self {
        let max_deviation_percentage = match record.kind() {
            SensorKind::Thermometer => Some(record.max_deviation_percentage(reference.temperature())),
            SensorKind::Humidity => Some(record.max_deviation_percentage(reference.humidity())),
            SensorKind::Unrecognized(_) => None,
        };

        Self {
            name: record.name().to_string(),
            kind: record.kind().clone(),
            readings: record.values().len(),
            average: record.average(),
            standard_deviation: record.standard_deviation(),
            max_deviation_percentage,
            rating: record.rating().cloned(),
        }
    }
}

/// Everything a run produced, in header order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CalibrationReport {
    /// Reference values from the header
    pub reference: ReferenceValues,
    /// One entry per sensor block
    pub sensors: Vec<SensorReport>,
    /// Segmentation counters
    pub segmentation: SegmenterStats,
}

impl CalibrationReport {
    /// Build a report from rated records
    pub fn new(reference: ReferenceValues, records: &[SensorRecord], segmentation: SegmenterStats) -> Self {
        Self {
            reference,
            sensors: records
                .iter()
                .map(|record| SensorReport::from_record(record, &reference))
                .collect(),
            segmentation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_uses_the_reference_for_the_kind() {
        let reference = ReferenceValues::new(70.0, 45.0);

        let mut hum = SensorRecord::new("humidity", "hum-1");
        hum.push_value(45.2);
        hum.push_value(44.1);
        hum.set_rating(Rating::Rejected);

        let odd = SensorRecord::new("barometer", "baro-1");

        let report = CalibrationReport::new(reference, &[hum, odd], SegmenterStats::default());
        assert_eq!(report.sensors.len(), 2);

        let hum = &report.sensors[0];
        assert_eq!(hum.readings, 2);
        assert!(libm::fabs(hum.max_deviation_percentage.unwrap() - 0.02) < 1e-9);
        assert_eq!(hum.rating, Some(Rating::Rejected));

        let odd = &report.sensors[1];
        assert_eq!(odd.max_deviation_percentage, None);
        assert_eq!(odd.rating, None);
        assert_eq!(odd.average, 0.0);
    }
}
