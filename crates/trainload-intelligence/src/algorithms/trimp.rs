// ABOUTME: Training Impulse (TRIMP) session scoring with a configurable Banister exponent
// ABOUTME: Heart-rate reserve path with a pace/elevation fallback; degenerate input scores zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trainload_core::constants::{pace, trimp};
use trainload_core::errors::AppError;
use trainload_core::models::{AthleteProfile, IntensitySource, WorkoutSample};

/// TRIMP exponent selection for the heart rate scoring path
///
/// - `BannisterMale`: Classic Bannister formula for males (exp(1.92))
/// - `BannisterFemale`: Classic Bannister formula for females (exp(1.67))
/// - `Custom`: Any other finite, positive exponent
///
/// # Scientific References
///
/// - Bannister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrimpAlgorithm {
    /// Bannister formula for males
    ///
    /// Formula: `duration_minutes × HR_reserve_fraction × 0.64 × exp(1.92 × HR_reserve_fraction)`
    #[default]
    BannisterMale,

    /// Bannister formula for females
    ///
    /// Uses lower exponential factor (1.67 vs 1.92) reflecting gender-specific physiology
    BannisterFemale,

    /// Bannister formula with a caller-chosen exponential factor
    Custom {
        /// Exponential factor applied to the heart rate reserve fraction
        exponent: f64,
    },
}

impl TrimpAlgorithm {
    /// Exponential factor used in `exp(k × HR_reserve_fraction)`
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        match self {
            Self::BannisterMale => trimp::MALE_EXPONENTIAL_FACTOR,
            Self::BannisterFemale => trimp::FEMALE_EXPONENTIAL_FACTOR,
            Self::Custom { exponent } => *exponent,
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BannisterMale => "bannister_male",
            Self::BannisterFemale => "bannister_female",
            Self::Custom { .. } => "custom",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::BannisterMale => "Bannister male TRIMP (exp(1.92))".to_owned(),
            Self::BannisterFemale => "Bannister female TRIMP (exp(1.67))".to_owned(),
            Self::Custom { exponent } => format!("Bannister TRIMP with custom exponent ({exponent})"),
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::BannisterMale => {
                "duration × HR_reserve_fraction × 0.64 × exp(1.92 × HR_reserve_fraction)"
            }
            Self::BannisterFemale => {
                "duration × HR_reserve_fraction × 0.64 × exp(1.67 × HR_reserve_fraction)"
            }
            Self::Custom { .. } => "duration × HR_reserve_fraction × 0.64 × exp(k × HR_reserve_fraction)",
        }
    }
}

impl fmt::Display for TrimpAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom { exponent } => write!(f, "{exponent}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for TrimpAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bannister_male" | "bannister" | "male" => Ok(Self::BannisterMale),
            "bannister_female" | "female" => Ok(Self::BannisterFemale),
            other => match other.parse::<f64>() {
                Ok(exponent) if exponent.is_finite() && exponent > 0.0 => {
                    Ok(Self::Custom { exponent })
                }
                _ => Err(AppError::invalid_input(format!(
                    "Unknown TRIMP algorithm: '{other}'. Valid options: bannister_male, bannister_female, or a positive exponent"
                ))),
            },
        }
    }
}

/// Which scoring path produced a session's load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// Banister TRIMP from heart rate reserve
    HeartRate,
    /// Pace table plus elevation bonus
    Pace,
}

impl ScoringMethod {
    /// Scoring path a session is routed to
    #[must_use]
    pub const fn for_sample(sample: &WorkoutSample) -> Self {
        match sample.intensity_source() {
            IntensitySource::HeartRate { .. } => Self::HeartRate,
            IntensitySource::Pace { .. } => Self::Pace,
        }
    }

    /// Short identifier used in reports and logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HeartRate => "heart_rate",
            Self::Pace => "pace",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-session load scorer
///
/// Stateless apart from the chosen exponent; cheap to copy and share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrimpScorer {
    algorithm: TrimpAlgorithm,
}

impl TrimpScorer {
    /// Create a scorer for the given algorithm
    #[must_use]
    pub const fn new(algorithm: TrimpAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Algorithm this scorer applies on the heart rate path
    #[must_use]
    pub const fn algorithm(&self) -> TrimpAlgorithm {
        self.algorithm
    }

    /// Score one session
    ///
    /// Returns a non-negative whole number. Zero or negative duration, any
    /// non-finite field, and every other degenerate input score exactly 0.
    #[must_use]
    pub fn score(&self, sample: &WorkoutSample, profile: &AthleteProfile) -> f64 {
        if !sample.is_finite() || sample.duration_seconds <= 0.0 {
            return 0.0;
        }
        let duration_minutes = sample.duration_seconds / trimp::SECONDS_PER_MINUTE;

        let raw = match sample.intensity_source() {
            IntensitySource::HeartRate {
                avg_heart_rate,
                max_heart_rate,
            } => self.heart_rate_load(
                duration_minutes,
                f64::from(avg_heart_rate),
                profile.effective_max_heart_rate(max_heart_rate),
                profile.resting_heart_rate,
            ),
            IntensitySource::Pace {
                distance_km,
                elevation_gain_m,
            } => pace_load(duration_minutes, distance_km, elevation_gain_m),
        };

        finalize(raw)
    }

    /// Banister TRIMP from heart rate reserve
    fn heart_rate_load(
        &self,
        duration_minutes: f64,
        avg_hr: f64,
        max_hr: f64,
        resting_hr: f64,
    ) -> f64 {
        let usable = [avg_hr, max_hr, resting_hr]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0);
        if !usable || max_hr <= resting_hr {
            return 0.0;
        }

        let hr_ratio = (avg_hr - resting_hr) / (max_hr - resting_hr);
        if !hr_ratio.is_finite() || hr_ratio <= 0.0 {
            return 0.0;
        }

        let weight = hr_ratio * trimp::BASE_MULTIPLIER * (self.algorithm.exponent() * hr_ratio).exp();
        duration_minutes * weight
    }
}

/// Pace/elevation fallback for sessions without heart rate
fn pace_load(duration_minutes: f64, distance_km: f64, elevation_gain_m: f64) -> f64 {
    if distance_km <= 0.0 {
        return 0.0;
    }
    let pace_min_per_km = duration_minutes / distance_km;
    if !pace_min_per_km.is_finite() {
        return 0.0;
    }

    duration_minutes * (pace_intensity_factor(pace_min_per_km) + elevation_bonus(elevation_gain_m))
}

/// Map pace (min/km) to an intensity factor; faster pace scores higher
#[must_use]
pub fn pace_intensity_factor(pace_min_per_km: f64) -> f64 {
    pace::INTENSITY_TABLE
        .iter()
        .find(|(threshold, _)| pace_min_per_km < *threshold)
        .map_or(pace::SLOWEST_INTENSITY_FACTOR, |(_, factor)| *factor)
}

/// Elevation modifier for pace scoring, clamped to `[0, 0.2]`
#[must_use]
pub fn elevation_bonus(elevation_gain_m: f64) -> f64 {
    if elevation_gain_m.is_nan() || elevation_gain_m <= 0.0 {
        return 0.0;
    }
    (elevation_gain_m / pace::ELEVATION_BONUS_SCALE_M).min(pace::MAX_ELEVATION_BONUS)
}

// Rounded at the session boundary only; stored and recomputed scores compare equal.
fn finalize(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    raw.round()
}

/// Score one session with the default Bannister male exponent
#[must_use]
pub fn score_session(sample: &WorkoutSample, profile: &AthleteProfile) -> f64 {
    TrimpScorer::default().score(sample, profile)
}
