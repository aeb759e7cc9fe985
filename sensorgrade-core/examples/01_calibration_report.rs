//! Calibration Report Example
//!
//! Rates a small calibration log and prints the statistics each rating was
//! based on.
//!
//! ## What You'll Learn
//!
//! - Evaluating a log in one call
//! - Reading per-sensor statistics from the report
//! - Swapping in stricter thresholds
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_calibration_report
//! ```

use sensorgrade_core::{evaluate_log, RatingEngine, RatingThresholds};

const LOG: &str = "\
reference 70.0 45.0
thermometer temp-1
2007-04-05T22:00 temp-1 72.4
2007-04-05T22:01 temp-1 76.0
2007-04-05T22:02 temp-1 79.1
2007-04-05T22:03 temp-1 75.6
2007-04-05T22:04 temp-1 71.2
thermometer temp-2
2007-04-05T22:01 temp-2 69.5
2007-04-05T22:02 temp-2 70.1
2007-04-05T22:03 temp-2 71.3
humidity hum-1
2007-04-05T22:04 hum-1 45.2
2007-04-05T22:05 hum-1 45.3
2007-04-05T22:06 hum-1 45.1
humidity hum-2
2007-04-05T22:04 hum-2 44.4
2007-04-05T22:05 hum-2 43.9
";

fn main() {
    println!("SensorGrade Calibration Report Example");
    println!("======================================\n");

    let run = match evaluate_log(LOG.lines(), &RatingEngine::default()) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Cannot rate this log: {e}");
            return;
        }
    };

    let report = run.report();
    println!(
        "Reference: {:.1}°C, {:.1}% RH\n",
        report.reference.temperature(),
        report.reference.humidity()
    );

    println!("{:<8} {:<12} {:>3} {:>8} {:>8} {:>8}  rating", "sensor", "kind", "n", "avg", "std", "maxdev");
    for sensor in &report.sensors {
        let rating = sensor
            .rating
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unrated".into());
        println!(
            "{:<8} {:<12} {:>3} {:>8.3} {:>8.3} {:>8.4}  {}",
            sensor.name,
            sensor.kind.to_string(),
            sensor.readings,
            sensor.average,
            sensor.standard_deviation,
            sensor.max_deviation_percentage.unwrap_or(f64::NAN),
            rating
        );
    }

    // A lab that only accepts humidity sensors within 0.5%
    println!("\nWith a 0.5% humidity tolerance:");
    let strict = RatingEngine::new(RatingThresholds::new_with_limits(0.5, 3.0, 5.0, 0.005));
    if let Ok(run) = evaluate_log(LOG.lines(), &strict) {
        for sensor in run.sensors.iter().filter(|s| s.kind().as_str() == "humidity") {
            if let Some(rating) = sensor.rating() {
                println!("  {}: {}", sensor.name(), rating);
            }
        }
    }
}
