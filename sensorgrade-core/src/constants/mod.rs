//! Constants for SensorGrade Core
//!
//! Every literal the engine depends on lives here with a note on what it
//! controls.
//!
//! - **Format**: keywords, tag names and token counts of the log format
//! - **Thresholds**: default rating limits per sensor kind

/// Keywords, kind tags and token counts of the calibration log.
pub mod format;

/// Default classification limits for the rating engine.
pub mod thresholds;

pub use format::{
    REFERENCE_KEYWORD, THERMOMETER_TAG, HUMIDITY_TAG, END_OF_LOG_SENTINEL,
};

pub use thresholds::{
    THERMOMETER_AVERAGE_WINDOW_C, THERMOMETER_ULTRA_PRECISE_MAX_STD_DEV,
    THERMOMETER_VERY_PRECISE_MAX_STD_DEV, HUMIDITY_MAX_DEVIATION_RATIO,
};
