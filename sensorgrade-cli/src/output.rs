//! Result output

use std::io::{self, Write};

use clap::ValueEnum;
use sensorgrade_core::CalibrationRun;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<name>: <rating>` line per sensor
    Text,
    /// Full report with statistics as JSON
    Json,
}

/// Print the run in header order
pub fn write_run<W: Write>(out: &mut W, run: &CalibrationRun, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for sensor in &run.sensors {
                match sensor.rating() {
                    Some(rating) => writeln!(out, "{}: {}", sensor.name(), rating)?,
                    None => writeln!(out, "{}: unrated", sensor.name())?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &run.report())?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorgrade_core::{evaluate_log, RatingEngine};

    fn run() -> CalibrationRun {
        evaluate_log(
            [
                "reference 70.0 45.0",
                "thermometer temp-1",
                "2007-04-05T22:00 temp-1 69.5",
                "2007-04-05T22:01 temp-1 70.1",
                "humidity hum-1",
                "2007-04-05T22:04 hum-1 45.2",
                "2007-04-05T22:05 hum-1 44.1",
                "anemometer wind-1",
            ],
            &RatingEngine::default(),
        )
        .unwrap()
    }

    #[test]
    fn text_lines_in_header_order() {
        let mut out = Vec::new();
        write_run(&mut out, &run(), OutputFormat::Text).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "temp-1: ultra precise\nhum-1: rejected\nwind-1: invalid sensor type: anemometer\n"
        );
    }

    #[test]
    fn json_report_carries_statistics() {
        let mut out = Vec::new();
        write_run(&mut out, &run(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let sensors = value["sensors"].as_array().unwrap();
        assert_eq!(sensors.len(), 3);
        assert_eq!(sensors[0]["name"], "temp-1");
        assert_eq!(sensors[0]["kind"], "thermometer");
        assert_eq!(sensors[0]["readings"], 2);
        assert_eq!(sensors[0]["rating"], "ultra precise");
        assert_eq!(sensors[1]["rating"], "rejected");
        assert!(sensors[2]["max_deviation_percentage"].is_null());
        assert_eq!(value["reference"]["temperature"], 70.0);
        assert_eq!(value["segmentation"]["headers"], 3);
    }
}
