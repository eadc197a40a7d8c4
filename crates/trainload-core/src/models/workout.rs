// ABOUTME: Workout sample model for one completed training session
// ABOUTME: Models heart-rate versus pace scoring eligibility as an explicit sum type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One completed training session
///
/// Rows arrive from the surrounding data layer with camelCase keys. The
/// `date` field accepts either an RFC 3339 timestamp or a bare `YYYY-MM-DD`
/// calendar date, which is read as midnight UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSample {
    /// When the session took place
    #[serde(deserialize_with = "deserialize_workout_date")]
    pub date: DateTime<Utc>,
    /// Session duration in seconds
    pub duration_seconds: f64,
    /// Distance covered in kilometres
    #[serde(default)]
    pub distance_km: f64,
    /// Positive elevation gain in metres
    #[serde(default)]
    pub elevation_gain_m: f64,
    /// Average heart rate in BPM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<u32>,
    /// Maximum heart rate recorded during the session in BPM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
}

/// Data a session can be scored from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntensitySource {
    /// Average heart rate is available
    HeartRate {
        /// Average heart rate in BPM
        avg_heart_rate: u32,
        /// Maximum heart rate recorded during the session, if any
        max_heart_rate: Option<u32>,
    },
    /// No heart rate; fall back to pace and elevation
    Pace {
        /// Distance covered in kilometres
        distance_km: f64,
        /// Positive elevation gain in metres
        elevation_gain_m: f64,
    },
}

impl IntensitySource {
    /// Short identifier used in reports and logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HeartRate { .. } => "heart_rate",
            Self::Pace { .. } => "pace",
        }
    }
}

impl WorkoutSample {
    /// Create a session with only a date and duration
    #[must_use]
    pub const fn new(date: DateTime<Utc>, duration_seconds: f64) -> Self {
        Self {
            date,
            duration_seconds,
            distance_km: 0.0,
            elevation_gain_m: 0.0,
            avg_heart_rate: None,
            max_heart_rate: None,
        }
    }

    /// Set the distance in kilometres
    #[must_use]
    pub const fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Set the elevation gain in metres
    #[must_use]
    pub const fn with_elevation_gain_m(mut self, elevation_gain_m: f64) -> Self {
        self.elevation_gain_m = elevation_gain_m;
        self
    }

    /// Set the average heart rate
    #[must_use]
    pub const fn with_avg_heart_rate(mut self, avg_heart_rate: u32) -> Self {
        self.avg_heart_rate = Some(avg_heart_rate);
        self
    }

    /// Set the maximum heart rate recorded during the session
    #[must_use]
    pub const fn with_max_heart_rate(mut self, max_heart_rate: u32) -> Self {
        self.max_heart_rate = Some(max_heart_rate);
        self
    }

    /// Which scoring path this session is eligible for
    ///
    /// Presence of an average heart rate always selects the heart rate path,
    /// even if it later turns out to be unusable.
    #[must_use]
    pub const fn intensity_source(&self) -> IntensitySource {
        match self.avg_heart_rate {
            Some(avg_heart_rate) => IntensitySource::HeartRate {
                avg_heart_rate,
                max_heart_rate: self.max_heart_rate,
            },
            None => IntensitySource::Pace {
                distance_km: self.distance_km,
                elevation_gain_m: self.elevation_gain_m,
            },
        }
    }

    /// Whether every floating point field is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.duration_seconds.is_finite()
            && self.distance_km.is_finite()
            && self.elevation_gain_m.is_finite()
    }

    /// Calendar day (UTC) the session belongs to
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

fn deserialize_workout_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_workout_date(&raw).map_err(serde::de::Error::custom)
}

fn parse_workout_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
        .ok_or_else(|| format!("expected RFC 3339 timestamp or YYYY-MM-DD date, got '{raw}'"))
}
