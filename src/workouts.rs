// ABOUTME: Workout import from JSON exported by the dashboard data layer
// ABOUTME: Accepts a bare array of workout rows or an object with an optional athlete profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout import
//!
//! Two shapes are accepted:
//!
//! ```json
//! [{"date": "2025-03-01", "durationSeconds": 2700, "avgHeartRate": 148}]
//! ```
//!
//! ```json
//! {
//!   "athlete": {"maxHeartRate": 186, "restingHeartRate": 52},
//!   "workouts": [{"date": "2025-03-01T07:30:00Z", "durationSeconds": 2700, "distanceKm": 8.2}]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use trainload_core::errors::{AppError, AppResult};
use trainload_core::models::{AthleteProfile, WorkoutSample};

/// Parsed workout file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutImport {
    /// Athlete profile carried by the file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub athlete: Option<AthleteProfile>,
    /// Workout rows in file order
    pub workouts: Vec<WorkoutSample>,
}

#[derive(Deserialize)]
struct WorkoutEnvelope {
    #[serde(default)]
    athlete: Option<AthleteProfile>,
    workouts: Vec<Value>,
}

impl WorkoutImport {
    /// Profile from the file, or `fallback` when the file has none
    #[must_use]
    pub fn athlete_or(&self, fallback: AthleteProfile) -> AthleteProfile {
        self.athlete.unwrap_or(fallback)
    }
}

/// Parse workouts from a JSON string
///
/// # Errors
///
/// Returns `AppError` with `SerializationError` if the document is not a
/// workout array or envelope, or a row fails to parse. Row errors name the
/// row index and carry the field-level message, including the offending date.
pub fn parse_workouts(json: &str) -> AppResult<WorkoutImport> {
    let document: Value = serde_json::from_str(json).map_err(|e| {
        AppError::serialization(format!("Invalid workout document: {e}")).with_source(e)
    })?;

    let import = match document {
        Value::Array(rows) => WorkoutImport {
            athlete: None,
            workouts: parse_rows(rows)?,
        },
        Value::Object(fields) => {
            let envelope: WorkoutEnvelope =
                serde_json::from_value(Value::Object(fields)).map_err(|e| {
                    AppError::serialization(format!("Invalid workout envelope: {e}"))
                        .with_source(e)
                })?;
            WorkoutImport {
                athlete: envelope.athlete,
                workouts: parse_rows(envelope.workouts)?,
            }
        }
        _ => {
            return Err(AppError::serialization(
                "Invalid workout document: expected an array of workouts or an object with a workouts array",
            ))
        }
    };

    debug!(workouts = import.workouts.len(), "Parsed workout document");
    Ok(import)
}

fn parse_rows(rows: Vec<Value>) -> AppResult<Vec<WorkoutSample>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value(row).map_err(|e| {
                AppError::serialization(format!("Invalid workout at row {index}: {e}"))
                    .with_source(e)
            })
        })
        .collect()
}

/// Read workouts from any reader
///
/// # Errors
///
/// Returns `AppError` if reading fails or the document is malformed
pub fn read_workouts<R: Read>(mut reader: R) -> AppResult<WorkoutImport> {
    let mut json = String::new();
    reader
        .read_to_string(&mut json)
        .map_err(|e| AppError::storage(format!("Failed to read workouts: {e}")).with_source(e))?;
    parse_workouts(&json)
}

/// Load workouts from a JSON file
///
/// # Errors
///
/// Returns `AppError` with `StorageError` if the file cannot be opened or
/// read, or `SerializationError` if its contents are malformed
pub fn load_workouts(path: impl AsRef<Path>) -> AppResult<WorkoutImport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        AppError::storage(format!("Failed to open {}: {e}", path.display())).with_source(e)
    })?;
    let import = read_workouts(BufReader::new(file))?;
    debug!(path = %path.display(), workouts = import.workouts.len(), "Loaded workouts");
    Ok(import)
}
