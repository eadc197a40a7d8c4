// ABOUTME: Benchmark fixtures for generating realistic workout histories
// ABOUTME: Deterministic generation so measurements are reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating workout histories.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use trainload::models::WorkoutSample;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// Two sessions a week for two months
    Small,
    /// Daily sessions for six months
    Medium,
    /// Doubles for a full year
    Large,
}

impl WorkoutBatchSize {
    /// Every batch size, smallest first
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Number of sessions in the batch
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 16,
            Self::Medium => 180,
            Self::Large => 730,
        }
    }
}

/// Day every generated history ends on
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default()
}

/// Generate a mixed heart rate and pace-only history ending on `reference_date()`
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_workouts(size: WorkoutBatchSize) -> Vec<WorkoutSample> {
    let count = size.count();
    let end = Utc.from_utc_datetime(&reference_date().and_hms_opt(6, 30, 0).unwrap_or_default());

    (0..count)
        .map(|index| {
            let days_ago = (index * 365 / count) as i64;
            let date = end - Duration::days(days_ago) + Duration::hours((index % 3) as i64 * 5);
            let duration_seconds = 1800.0 + ((index * 137) % 3600) as f64;
            let distance_km = 5.0 + ((index * 251) % 150) as f64 / 10.0;
            let sample = WorkoutSample::new(date, duration_seconds)
                .with_distance_km(distance_km)
                .with_elevation_gain_m(((index * 31) % 500) as f64);

            if index % 4 == 3 {
                sample
            } else {
                let avg_hr = 125 + ((index * 17) % 45) as u32;
                sample
                    .with_avg_heart_rate(avg_hr)
                    .with_max_heart_rate(avg_hr + 22)
            }
        })
        .collect()
}

/// Dense daily series with a weekly pattern and a rest day every seventh day
#[must_use]
pub fn generate_daily_loads(days: usize) -> Vec<f64> {
    (0..days)
        .map(|day| match day % 7 {
            6 => 0.0,
            2 | 4 => 140.0 + (day % 11) as f64,
            _ => 60.0 + (day % 23) as f64,
        })
        .collect()
}
