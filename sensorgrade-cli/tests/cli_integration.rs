//! Runs the `sensorgrade` binary end to end

use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const LOG: &str = "reference 70.0 45.0
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

fn sensorgrade(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sensorgrade"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The binary may exit before reading stdin (bad thresholds, missing file)
    if let Err(e) = child.stdin.take().unwrap().write_all(stdin.as_bytes()) {
        assert_eq!(e.kind(), ErrorKind::BrokenPipe, "writing stdin: {e}");
    }
    child.wait_with_output().unwrap()
}

fn log_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn rates_log_from_stdin() {
    let output = sensorgrade(&[], LOG);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        [
            "temp-1: precise",
            "temp-2: ultra precise",
            "hum-1: accepted",
            "hum-2: rejected",
        ]
    );
}

#[test]
fn stops_reading_at_sentinel() {
    let input = "reference 70.0 45.0\nthermometer temp-1\nt0 temp-1 70.1\n\u{1d}\nhumidity hum-1\nt1 hum-1 45.0\n";
    let output = sensorgrade(&[], input);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["temp-1: ultra precise"]);
}

#[test]
fn rates_log_from_file() {
    let file = log_file(LOG);
    let output = sensorgrade(&["--input", file.path().to_str().unwrap()], "");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 4);
}

#[test]
fn json_output_has_report_fields() {
    let output = sensorgrade(&["--format", "json"], LOG);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["reference"]["humidity"], 45.0);
    assert_eq!(value["sensors"][1]["name"], "temp-2");
    assert_eq!(value["sensors"][1]["rating"], "ultra precise");
    assert_eq!(value["sensors"][3]["kind"], "humidity");
    assert_eq!(value["segmentation"]["readings"], 26);
}

#[test]
fn thresholds_file_overrides_defaults() {
    let thresholds = log_file(r#"{ "humidity_max_deviation": 0.1 }"#);
    let output = sensorgrade(
        &["--thresholds", thresholds.path().to_str().unwrap()],
        LOG,
    );

    assert!(output.status.success());
    assert!(stdout_lines(&output).contains(&"hum-2: accepted".to_string()));
}

#[test]
fn bad_thresholds_file_fails() {
    let thresholds = log_file("not json");
    let output = sensorgrade(
        &["--thresholds", thresholds.path().to_str().unwrap()],
        LOG,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_header_exits_with_one() {
    let output = sensorgrade(&[], "Potato 17 42\nthermometer temp-1\nt0 temp-1 70.0\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Potato"));
}

#[test]
fn short_header_exits_with_one() {
    let output = sensorgrade(&[], "reference 70.0\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected 3 elements, found 2"));
}

#[test]
fn header_only_log_exits_with_one() {
    let output = sensorgrade(&[], "reference 70.0 45.0\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No content found for sensors"));
}

#[test]
fn empty_input_exits_with_one() {
    let output = sensorgrade(&[], "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_thresholds_file_exits_before_reading_log() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("thresholds.json");
    let big_log = LOG.repeat(2000);
    let output = sensorgrade(&["--thresholds", missing.to_str().unwrap()], &big_log);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("thresholds"));
}

#[test]
fn missing_log_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.log");
    let output = sensorgrade(&["--input", missing.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
}
