//! Core rating engine for SensorGrade
//!
//! Reads a calibration log, splits it into per-sensor readings and rates
//! every sensor against the reference values the room was held at.
//!
//! Key constraints:
//! - The whole log fits in memory
//! - Malformed readings are dropped, never fatal
//! - Only the reference header can abort a run
//!
//! ```no_run
//! use sensorgrade_core::{evaluate_log, RatingEngine};
//!
//! let log = std::fs::read_to_string("calibration.log").unwrap();
//! match evaluate_log(log.lines(), &RatingEngine::default()) {
//!     Ok(run) => {
//!         for sensor in &run.sensors {
//!             // temp-1: ultra precise
//!         }
//!     }
//!     Err(e) => {} // Header unusable - nothing was rated
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod constants;
pub mod coordinator;
pub mod errors;
pub mod pipeline;
pub mod rating;
pub mod reference;
pub mod report;
pub mod segmenter;
pub mod sensor;
pub mod stats;
pub mod traits;

// Public API
pub use errors::{DataLineError, HeaderError, HeaderResult};
pub use traits::{Rater, Validatable};
pub use reference::ReferenceValues;
pub use sensor::{SensorKind, SensorRecord};
pub use segmenter::{segment_lines, LogSegmenter, SegmenterState, SegmenterStats};
pub use rating::{Rating, RatingEngine, RatingThresholds};
pub use coordinator::{rate_sequential, RatingSummary};
#[cfg(feature = "std")]
pub use coordinator::rate_all;
pub use pipeline::{evaluate_log, CalibrationRun};
pub use report::{CalibrationReport, SensorReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
