//! Integration tests for export functionality
//!
//! Tests the library export layer against files on disk:
//! - Output path construction with and without a trailing separator
//! - Line counts for whole and truncated inputs
//! - Error reporting for unopenable input and output paths

use sbet_extract::{
    export_sbet_file, ExportOptions, OpenMode, SbetError, SbetRecord, RECORD_SIZE,
};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_sbet(path: &Path, records: &[SbetRecord], extra_bytes: usize) {
    let mut data: Vec<u8> = records.iter().flat_map(|r| r.to_bytes()).collect();
    data.extend(std::iter::repeat(0x5Au8).take(extra_bytes));
    fs::write(path, data).expect("Failed to write SBET fixture");
}

fn sample_records(count: usize) -> Vec<SbetRecord> {
    (0..count)
        .map(|i| SbetRecord {
            time: 345_600.0 + i as f64 * 0.005,
            lat: 39.0_f64.to_radians(),
            lon: (-106.0_f64).to_radians(),
            alt: 3100.0 + i as f64,
            roll: 0.01,
            pitch: -0.02,
            heading: PI / 2.0,
            x_vel: 40.0,
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_export_writes_sbet_csv_in_output_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("flight.out");
    write_sbet(&input, &sample_records(25), 0);

    let options = ExportOptions::new(temp_dir.path().to_str().unwrap());
    let report = export_sbet_file(&input, &options).expect("Export should succeed");

    let csv_path = temp_dir.path().join("sbet.csv");
    assert_eq!(report.csv_path.as_deref(), Some(csv_path.as_path()));
    assert_eq!(report.records_written, 25);
    assert_eq!(report.trailing_bytes, 0);

    let content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "GpsTime,X,Y,Z,Heading,Roll,Pitch");
    assert_eq!(lines.len(), 26);
    assert_eq!(
        lines[1],
        "345600.000000,-106.000000,39.000000,3100.000000,90.000000,0.572958,-1.145916"
    );
}

#[test]
fn test_export_with_trailing_separator() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("flight.out");
    write_sbet(&input, &sample_records(2), 0);

    let dir_with_slash = format!("{}/", temp_dir.path().display());
    let report = export_sbet_file(&input, &ExportOptions::new(dir_with_slash))
        .expect("Export should succeed");

    let csv_path = report.csv_path.expect("CSV path should be reported");
    assert!(!csv_path.to_string_lossy().contains("//"));
    assert!(temp_dir.path().join("sbet.csv").exists());
}

#[test]
fn test_line_count_is_floor_of_record_count() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("truncated.out");

    for (records, extra) in [(0, 0), (1, 0), (3, 1), (7, RECORD_SIZE - 1), (0, 100)] {
        write_sbet(&input, &sample_records(records), extra);
        let len = fs::metadata(&input).unwrap().len() as usize;

        let report = export_sbet_file(&input, &ExportOptions::new(temp_dir.path().to_str().unwrap()))
            .expect("Truncated input must not be an error");

        let content = fs::read_to_string(temp_dir.path().join("sbet.csv")).unwrap();
        let data_lines = content.lines().count() - 1;
        assert_eq!(data_lines, len / RECORD_SIZE);
        assert_eq!(report.trailing_bytes, len % RECORD_SIZE);
    }
}

#[test]
fn test_empty_input_writes_header_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("empty.out");
    fs::write(&input, b"").unwrap();

    export_sbet_file(&input, &ExportOptions::new(temp_dir.path().to_str().unwrap()))
        .expect("Empty input should succeed");

    let content = fs::read_to_string(temp_dir.path().join("sbet.csv")).unwrap();
    assert_eq!(content, "GpsTime,X,Y,Z,Heading,Roll,Pitch\n");
}

#[test]
fn test_missing_input_is_open_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("does_not_exist.out");

    let err = export_sbet_file(&input, &ExportOptions::new(temp_dir.path().to_str().unwrap()))
        .expect_err("Missing input should fail");

    match err {
        SbetError::FileOpen { path, mode, .. } => {
            assert_eq!(path, input);
            assert_eq!(mode, OpenMode::Read);
        }
        other => panic!("Unexpected error: {other}"),
    }
    assert!(!temp_dir.path().join("sbet.csv").exists());
}

#[test]
fn test_missing_output_dir_is_open_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("flight.out");
    write_sbet(&input, &sample_records(1), 0);
    let missing_dir = temp_dir.path().join("nonexistent");

    let err = export_sbet_file(&input, &ExportOptions::new(missing_dir.to_str().unwrap()))
        .expect_err("Output into a missing directory should fail");

    match err {
        SbetError::FileOpen { path, mode, .. } => {
            assert_eq!(path, missing_dir.join("sbet.csv"));
            assert_eq!(mode, OpenMode::Write);
        }
        other => panic!("Unexpected error: {other}"),
    }
}
