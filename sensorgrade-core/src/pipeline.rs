//! End-to-end evaluation of a calibration log
//!
//! ```text
//! lines ─► header ─► ReferenceValues ─────────────┐
//!   │                                             ▼
//!   └────► rest ───► LogSegmenter ─► records ─► rating ─► CalibrationRun
//! ```
//!
//! A bad header stops the run before any sensor is touched.

use alloc::vec::Vec;

use crate::{
    coordinator::RatingSummary,
    errors::{HeaderError, HeaderResult},
    reference::ReferenceValues,
    report::CalibrationReport,
    segmenter::{LogSegmenter, SegmenterStats},
    sensor::SensorRecord,
    traits::Rater,
};

/// Result of evaluating one log
#[derive(Debug, Clone)]
pub struct CalibrationRun {
    /// Reference values from the header line
    pub reference: ReferenceValues,
    /// Rated sensors in header order
    pub sensors: Vec<SensorRecord>,
    /// Segmentation counters
    pub segmentation: SegmenterStats,
    /// Rating pass outcome
    pub summary: RatingSummary,
}

impl CalibrationRun {
    /// Serializable report of this run
    pub fn report(&self) -> CalibrationReport {
        CalibrationReport::new(self.reference, &self.sensors, self.segmentation.clone())
    }
}

/// Parse, segment and rate a whole log
///
/// The first line must be the reference header. With the `std` feature the
/// sensors are rated concurrently, otherwise one after another.
///
/// ```rust
/// use sensorgrade_core::{evaluate_log, RatingEngine};
///
/// let log = [
///     "reference 70.0 45.0",
///     "thermometer temp-1",
///     "2007-04-05T22:00 temp-1 69.5",
///     "2007-04-05T22:01 temp-1 70.1",
/// ];
///
/// let run = evaluate_log(log, &RatingEngine::default())?;
/// assert_eq!(run.sensors[0].rating().unwrap().to_string(), "ultra precise");
/// # Ok::<(), sensorgrade_core::HeaderError>(())
/// ```
pub fn evaluate_log<I, S, R>(lines: I, rater: &R) -> HeaderResult<CalibrationRun>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rater + Sync,
{
    let mut lines = lines.into_iter();
    let header = lines.next().ok_or(HeaderError::MissingHeader)?;
    let reference = ReferenceValues::from_header_line(header.as_ref())?;

    let mut segmenter = LogSegmenter::new();
    for line in lines {
        segmenter.feed(line.as_ref());
    }
    let (mut sensors, segmentation) = segmenter.finish_with_stats();

    #[cfg(feature = "std")]
    let summary = crate::coordinator::rate_all(&mut sensors, &reference, rater);
    #[cfg(not(feature = "std"))]
    let summary = crate::coordinator::rate_sequential(&mut sensors, &reference, rater);

    for sensor in &sensors {
        log_debug!(
            "{} ({}): {} readings, avg {:.4}, std dev {:.4}",
            sensor.name(),
            sensor.kind(),
            sensor.values().len(),
            sensor.average(),
            sensor.standard_deviation()
        );
    }

    Ok(CalibrationRun {
        reference,
        sensors,
        segmentation,
        summary,
    })
}
