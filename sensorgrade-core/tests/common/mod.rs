//! Shared fixtures for integration tests
//!
//! Logs are written the way they arrive from the field, including the
//! stray whitespace and malformed lines operators paste in.

#![allow(dead_code)]

use sensorgrade_core::SensorRecord;

/// Log with one well-behaved sensor of each kind
pub const BASIC_LOG: &str = "\
reference 70.0 45.0
thermometer temp-1
2007-04-05T22:00 temp-1 69.5
2007-04-05T22:01 temp-1 70.1
humidity hum-1
2007-04-05T22:04 hum-1 45.2
2007-04-05T22:05 hum-1 45.3
";

/// Longer log with noisy thermometers and a drifting humidity sensor
pub const FULL_LOG: &str = "\
reference 70.0 45.0
thermometer temp-1
2007-04-05T22:00 temp-1 72.4
2007-04-05T22:01 temp-1 76.0
2007-04-05T22:02 temp-1 79.1
2007-04-05T22:03 temp-1 75.6
2007-04-05T22:04 temp-1 71.2
2007-04-05T22:05 temp-1 71.4
2007-04-05T22:06 temp-1 69.2
2007-04-05T22:07 temp-1 65.2
2007-04-05T22:08 temp-1 62.8
2007-04-05T22:09 temp-1 61.4
2007-04-05T22:10 temp-1 64.0
2007-04-05T22:11 temp-1 67.5
2007-04-05T22:12 temp-1 69.4
thermometer temp-2
2007-04-05T22:01 temp-2 69.5
2007-04-05T22:02 temp-2 70.1
2007-04-05T22:03 temp-2 71.3
2007-04-05T22:04 temp-2 71.5
2007-04-05T22:05 temp-2 69.8
thermometer temp-3
2007-04-05T22:01 temp-3 66.0
2007-04-05T22:02 temp-3 70.0
2007-04-05T22:03 temp-3 74.0
humidity hum-1
2007-04-05T22:04 hum-1 45.2
2007-04-05T22:05 hum-1 45.3
2007-04-05T22:06 hum-1 45.1
humidity hum-2
2007-04-05T22:04 hum-2 44.4
2007-04-05T22:05 hum-2 43.9
2007-04-05T22:06 hum-2 44.9
2007-04-05T22:07 hum-2 43.8
2007-04-05T22:08 hum-2 42.1
";

/// Log with orphans, foreign readings, garbage values and an unknown kind
pub const MESSY_LOG: &str = "  reference 70.0 45.0   
2007-04-05T21:59 temp-1 70.0
thermometer temp-1
2007-04-05T22:00 temp-1 69.5
2007-04-05T22:00 temp-9 99.9
2007-04-05T22:01 temp-1 seventy

2007-04-05T22:02 temp-1 70.1    
barometer baro-1
2007-04-05T22:03 baro-1 1013.2
humidity hum-1
";

/// Build a record by hand
pub fn record(kind: &str, name: &str, values: &[f64]) -> SensorRecord {
    let mut record = SensorRecord::new(kind, name);
    for &value in values {
        record.push_value(value);
    }
    record
}

/// Assert two floats agree to within `eps`
pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual}"
    );
}
