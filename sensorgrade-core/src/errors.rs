//! Error Types for Calibration Log Processing
//!
//! ## Error Categories
//!
//! Errors fall into two categories, and a third outcome that is deliberately
//! not an error at all:
//!
//! ### Fatal: Reference Header
//! - `MissingHeader`: the log has no lines at all
//! - `TokenCount`: the first line is not `reference <temp> <humidity>`
//! - `NotAReference`: the first token is not the `reference` keyword
//! - `InvalidNumber`: temperature or humidity is not a finite number
//!
//! A `HeaderError` stops the run before any sensor is segmented or rated.
//!
//! ### Recoverable: Data Lines
//! - `NameMismatch`: the reading belongs to a sensor other than the open one
//! - `InvalidValue`: the reading value does not parse as a number
//!
//! A `DataLineError` never escapes the segmenter. The offending line is
//! logged and dropped, and segmentation continues with the next line.
//!
//! ### Not an error: Unrecognized Sensor Kind
//! A header with an unknown kind still produces a record. The rating engine
//! labels it with [`Rating::InvalidSensorType`](crate::rating::Rating), so one
//! bad sensor never aborts the batch.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sensorgrade_core::{HeaderError, ReferenceValues};
//!
//! match ReferenceValues::from_header_line("reference 70.0 45.0") {
//!     Ok(reference) => {
//!         assert_eq!(reference.temperature(), 70.0);
//!     }
//!     Err(HeaderError::InvalidNumber { field, .. }) => {
//!         // Calibration values are unusable - nothing can be rated
//!         panic!("bad {field}");
//!     }
//!     Err(_) => {
//!         // Not a calibration log at all
//!     }
//! }
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for header extraction
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Fatal errors raised while reading the reference header line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeaderError {
    /// The log contained no lines
    #[error("Missing reference header: the log is empty")]
    MissingHeader,

    /// Header does not split into `reference <temperature> <humidity>`
    #[error("Error while parsing the header: expected 3 elements, found {found}")]
    TokenCount {
        /// Number of whitespace-separated tokens on the line
        found: usize,
    },

    /// First token is not the `reference` keyword
    #[error("First line doesn't contain the reference (found '{keyword}')")]
    NotAReference {
        /// The token found where `reference` was expected
        keyword: String,
    },

    /// Temperature or humidity could not be read as a finite number
    #[error("Invalid reference {field}: '{token}' is not a number")]
    InvalidNumber {
        /// Either `temperature` or `humidity`
        field: &'static str,
        /// The raw token
        token: String,
    },
}

/// Recoverable problems with a single data line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataLineError {
    /// Reading names a sensor other than the one currently open
    #[error("Reading for sensor '{found}' ignored while reading sensor '{expected}'")]
    NameMismatch {
        /// Name of the open sensor
        expected: String,
        /// Name found on the data line
        found: String,
    },

    /// Reading value is not a number
    #[error("Error while parsing the recorded measure for device {sensor}: '{token}' is not a number")]
    InvalidValue {
        /// Name of the open sensor
        sensor: String,
        /// The raw value token
        token: String,
    },
}
