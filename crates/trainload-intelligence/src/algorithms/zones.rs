// ABOUTME: Training zone classification from training stress balance and chronic load
// ABOUTME: Fixed-priority rule table where low chronic load overrides every balance check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use trainload_core::constants::training_load::{
    DETRAINING_CHRONIC_THRESHOLD, MAINTENANCE_BALANCE, OPTIMAL_BALANCE, OVERREACHING_BALANCE,
    PRODUCTIVE_BALANCE, RECOVERY_BALANCE,
};
use trainload_core::errors::AppError;

use super::finite_or_zero;

/// Training zone for the latest day of a load balance series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingZone {
    /// Chronic load below 30: fitness is eroding regardless of freshness
    Detraining,
    /// Balance above +25: well rested, load can increase
    Recovery,
    /// Balance +5 to +25: holding fitness
    Maintenance,
    /// Balance -10 to +5: productive training stimulus
    Productive,
    /// Balance -25 to -10: optimal overload
    Optimal,
    /// Balance -40 to -25: functional overreaching
    Overreaching,
    /// Balance at or below -40: rest required
    Overtraining,
}

impl TrainingZone {
    /// Every zone, in classification priority order
    pub const ALL: [Self; 7] = [
        Self::Detraining,
        Self::Recovery,
        Self::Maintenance,
        Self::Productive,
        Self::Optimal,
        Self::Overreaching,
        Self::Overtraining,
    ];

    /// Classify a (balance, chronic) pair
    ///
    /// First match wins:
    ///
    /// | Condition       | Zone         |
    /// |-----------------|--------------|
    /// | chronic < 30    | Detraining   |
    /// | balance > 25    | Recovery     |
    /// | balance > 5     | Maintenance  |
    /// | balance > -10   | Productive   |
    /// | balance > -25   | Optimal      |
    /// | balance > -40   | Overreaching |
    /// | otherwise       | Overtraining |
    ///
    /// Non-finite inputs are read as 0, so the function is total.
    #[must_use]
    pub fn classify(balance: f64, chronic: f64) -> Self {
        let balance = finite_or_zero(balance);
        let chronic = finite_or_zero(chronic);

        if chronic < DETRAINING_CHRONIC_THRESHOLD {
            Self::Detraining
        } else if balance > RECOVERY_BALANCE {
            Self::Recovery
        } else if balance > MAINTENANCE_BALANCE {
            Self::Maintenance
        } else if balance > PRODUCTIVE_BALANCE {
            Self::Productive
        } else if balance > OPTIMAL_BALANCE {
            Self::Optimal
        } else if balance > OVERREACHING_BALANCE {
            Self::Overreaching
        } else {
            Self::Overtraining
        }
    }

    /// Machine-readable zone name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Detraining => "detraining",
            Self::Recovery => "recovery",
            Self::Maintenance => "maintenance",
            Self::Productive => "productive",
            Self::Optimal => "optimal",
            Self::Overreaching => "overreaching",
            Self::Overtraining => "overtraining",
        }
    }

    /// Status-card text for the zone
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Detraining => "Fitness base is low; build consistent volume",
            Self::Recovery => "Fresh and well rested; ready to raise training load",
            Self::Maintenance => "Holding fitness with light fatigue",
            Self::Productive => "Balanced load that is building fitness",
            Self::Optimal => "Sustained overload in the fitness-building range",
            Self::Overreaching => "High fatigue; schedule recovery soon",
            Self::Overtraining => "Fatigue far exceeds fitness; rest is needed",
        }
    }
}

impl fmt::Display for TrainingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrainingZone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|zone| zone.name() == wanted)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown training zone: '{s}'")))
    }
}

/// Classify a (balance, chronic) pair into a training zone
#[must_use]
pub fn classify_zone(balance: f64, chronic: f64) -> TrainingZone {
    TrainingZone::classify(balance, chronic)
}
