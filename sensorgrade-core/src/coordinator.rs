//! Concurrent Rating
//!
//! ## Overview
//!
//! Each sensor is rated on its own scoped thread, and the caller is released
//! only after every thread has been joined:
//!
//! ```text
//!             ┌─► rate(sensors[0]) ─┐
//! rate_all ───┼─► rate(sensors[1]) ─┼──► join all ──► RatingSummary
//!             └─► rate(sensors[n]) ─┘
//! ```
//!
//! ## Sharing Rules
//!
//! - every thread borrows exactly one `&mut SensorRecord`, so no two threads
//!   ever write the same record and no locking is needed
//! - the reference values and the rater are shared read-only
//! - the slice keeps its order; only each record's rating is filled in
//!
//! Ratings do not depend on scheduling: a sensor's label is a function of its
//! own readings and the reference, so concurrent and sequential rating agree.
//!
//! ## Failure Isolation
//!
//! A thread that panics leaves its own record unrated and is reported in
//! [`RatingSummary::failed`]. All other sensors are still rated. With the
//! built-in engine this never happens; rating is total.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{reference::ReferenceValues, sensor::SensorRecord, traits::Rater};

/// Outcome of a rating pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RatingSummary {
    /// Records that hold a rating after the pass
    pub rated: usize,
    /// Names of sensors whose rating could not be computed
    pub failed: Vec<String>,
}

impl RatingSummary {
    /// Whether every sensor received a rating
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Rate every sensor in parallel, one thread per sensor
///
/// Returns once all threads have finished.
#[cfg(feature = "std")]
pub fn rate_all<R>(sensors: &mut [SensorRecord], reference: &ReferenceValues, rater: &R) -> RatingSummary
where
    R: Rater + Sync,
{
    use alloc::string::ToString;

    let mut summary = RatingSummary::default();

    std::thread::scope(|s| {
        let handles: Vec<_> = sensors
            .iter_mut()
            .map(|sensor| {
                let name = sensor.name().to_string();
                let handle = s.spawn(move || {
                    let rating = rater.rate(sensor, reference);
                    sensor.set_rating(rating);
                });
                (name, handle)
            })
            .collect();

        for (name, handle) in handles {
            match handle.join() {
                Ok(()) => summary.rated += 1,
                Err(_) => {
                    log_error!("Rating thread for sensor {} panicked; sensor left unrated", name);
                    summary.failed.push(name);
                }
            }
        }
    });

    summary
}

/// Rate every sensor on the calling thread, in slice order
pub fn rate_sequential<R>(
    sensors: &mut [SensorRecord],
    reference: &ReferenceValues,
    rater: &R,
) -> RatingSummary
where
    R: Rater + ?Sized,
{
    for sensor in sensors.iter_mut() {
        let rating = rater.rate(sensor, reference);
        sensor.set_rating(rating);
    }

    RatingSummary {
        rated: sensors.len(),
        failed: Vec::new(),
    }
}
