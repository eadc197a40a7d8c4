// ABOUTME: Integration tests for workout JSON import
// ABOUTME: Covers both document shapes, date formats, I/O failures, and file-to-report flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;

use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::NamedTempFile;
use trainload::errors::ErrorCode;
use trainload::intelligence::TrainingLoadCalculator;
use trainload::models::AthleteProfile;
use trainload::workouts::{load_workouts, parse_workouts, read_workouts};

const ROWS: &str = r#"[
    {"date": "2025-03-10T06:45:00Z", "durationSeconds": 3600, "avgHeartRate": 150, "maxHeartRate": 176},
    {"date": "2025-03-09", "durationSeconds": 3000, "distanceKm": 10.0, "elevationGainM": 100},
    {"date": "2025-03-08T18:00:00+02:00", "durationSeconds": 1800, "distanceKm": 5.2}
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_bare_array() {
    let import = parse_workouts(ROWS).unwrap();

    assert!(import.athlete.is_none());
    assert_eq!(import.workouts.len(), 3);
    assert_eq!(import.workouts[0].avg_heart_rate, Some(150));
    assert_eq!(import.workouts[0].max_heart_rate, Some(176));
    assert_eq!(
        import.workouts[1].date,
        Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap()
    );
    assert_eq!(
        import.workouts[2].date,
        Utc.with_ymd_and_hms(2025, 3, 8, 16, 0, 0).unwrap()
    );
}

#[test]
fn test_parse_envelope_with_athlete() {
    let json = r#"{
        "athlete": {"maxHeartRate": 182, "restingHeartRate": 45},
        "workouts": [{"date": "2025-03-10", "durationSeconds": 2400, "avgHeartRate": 140}]
    }"#;

    let import = parse_workouts(json).unwrap();

    assert_eq!(import.athlete, Some(AthleteProfile::new(182.0, 45.0)));
    assert_eq!(import.workouts.len(), 1);
    assert_eq!(
        import.athlete_or(AthleteProfile::default()),
        AthleteProfile::new(182.0, 45.0)
    );
}

#[test]
fn test_envelope_without_athlete_uses_fallback() {
    let import = parse_workouts(r#"{"workouts": []}"#).unwrap();
    assert!(import.workouts.is_empty());
    assert_eq!(
        import.athlete_or(AthleteProfile::new(200.0, 40.0)),
        AthleteProfile::new(200.0, 40.0)
    );
}

#[test]
fn test_malformed_documents_rejected() {
    for json in [
        "not json",
        r#"{"rows": []}"#,
        r#"[{"durationSeconds": 1800}]"#,
        r#"[{"date": "yesterday", "durationSeconds": 1800}]"#,
    ] {
        let error = parse_workouts(json).unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError, "input {json}");
    }
}

#[test]
fn test_read_from_reader() {
    let import = read_workouts(ROWS.as_bytes()).unwrap();
    assert_eq!(import.workouts.len(), 3);
}

#[test]
fn test_load_from_file() {
    let file = write_temp(ROWS);

    let import = load_workouts(file.path()).unwrap();

    assert_eq!(import.workouts.len(), 3);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let error = load_workouts(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.message.contains("missing.json"));
}

#[test]
fn test_file_to_report() {
    let file = write_temp(ROWS);
    let import = load_workouts(file.path()).unwrap();
    let reference_date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let report = TrainingLoadCalculator::standard()
        .unwrap()
        .calculate(
            &import.workouts,
            reference_date,
            &import.athlete_or(AthleteProfile::default()),
        );

    // 15 (5.77 min/km easy run), 35 (pace + elevation), 100 (heart rate)
    assert_eq!(report.daily.recent(3), &[15.0, 35.0, 100.0]);
    assert_eq!(report.workouts.len(), 3);
}

#[test]
fn test_bad_row_error_names_row_and_value() {
    let error =
        parse_workouts(r#"[{"date": "last tuesday", "durationSeconds": 1800}]"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.message.contains("row 0"), "{}", error.message);
    assert!(error.message.contains("last tuesday"), "{}", error.message);

    let envelope = r#"{"workouts": [
        {"date": "2025-03-10", "durationSeconds": 1800},
        {"date": "2025-03-11", "durationSeconds": "long"}
    ]}"#;
    let error = parse_workouts(envelope).unwrap_err();
    assert!(error.message.contains("row 1"), "{}", error.message);
    assert!(error.message.contains("long"), "{}", error.message);
}

#[test]
fn test_scalar_document_rejected() {
    let error = parse_workouts("42").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.message.contains("expected an array"));
}
