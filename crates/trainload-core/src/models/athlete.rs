// ABOUTME: Athlete profile supplying heart rate context to session scoring
// ABOUTME: Read-only input with sports-science defaults for max and resting heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::heart_rate::{DEFAULT_MAX_HEART_RATE, DEFAULT_RESTING_HEART_RATE};

/// Heart rate context for an athlete
///
/// Supplied by the surrounding application and never mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Maximum heart rate in BPM
    #[serde(default = "default_max_heart_rate")]
    pub max_heart_rate: f64,
    /// Resting heart rate in BPM
    #[serde(default = "default_resting_heart_rate")]
    pub resting_heart_rate: f64,
}

const fn default_max_heart_rate() -> f64 {
    DEFAULT_MAX_HEART_RATE
}

const fn default_resting_heart_rate() -> f64 {
    DEFAULT_RESTING_HEART_RATE
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            max_heart_rate: DEFAULT_MAX_HEART_RATE,
            resting_heart_rate: DEFAULT_RESTING_HEART_RATE,
        }
    }
}

impl AthleteProfile {
    /// Create a profile from explicit heart rate values
    #[must_use]
    pub const fn new(max_heart_rate: f64, resting_heart_rate: f64) -> Self {
        Self {
            max_heart_rate,
            resting_heart_rate,
        }
    }

    /// Maximum heart rate to score a session against
    ///
    /// Prefers the profile value, then the session's recorded maximum, then
    /// the population default.
    #[must_use]
    pub fn effective_max_heart_rate(&self, session_max: Option<u32>) -> f64 {
        if self.max_heart_rate.is_finite() && self.max_heart_rate > 0.0 {
            return self.max_heart_rate;
        }
        session_max
            .filter(|&max| max > 0)
            .map_or(DEFAULT_MAX_HEART_RATE, f64::from)
    }
}
