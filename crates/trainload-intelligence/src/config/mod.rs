// ABOUTME: Typed configuration for the training-load engine
// ABOUTME: Window length, smoothing time constants, and TRIMP exponent with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use trainload_core::constants::training_load::{
    ACUTE_TIME_CONSTANT_DAYS, CHRONIC_TIME_CONSTANT_DAYS, DEFAULT_WINDOW_DAYS,
};
use trainload_core::errors::{AppError, AppResult};

use crate::algorithms::{LoadBalanceEngine, TrimpAlgorithm, TrimpScorer};

/// Training-load engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingLoadConfig {
    /// Trailing window (days) of the daily load series
    pub window_days: usize,
    /// Acute load time constant (days)
    pub acute_days: usize,
    /// Chronic load time constant (days)
    pub chronic_days: usize,
    /// Exponent used on the heart rate scoring path
    pub trimp_algorithm: TrimpAlgorithm,
}

impl Default for TrainingLoadConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            acute_days: ACUTE_TIME_CONSTANT_DAYS,
            chronic_days: CHRONIC_TIME_CONSTANT_DAYS,
            trimp_algorithm: TrimpAlgorithm::default(),
        }
    }
}

impl TrainingLoadConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` if the window or either time
    /// constant is zero, or the TRIMP exponent is not a positive finite number
    pub fn validate(&self) -> AppResult<()> {
        if self.window_days == 0 {
            return Err(AppError::config("window_days must be at least 1"));
        }
        if self.acute_days == 0 || self.chronic_days == 0 {
            return Err(AppError::config(format!(
                "time constants must be positive, got acute={} chronic={}",
                self.acute_days, self.chronic_days
            )));
        }
        let exponent = self.trimp_algorithm.exponent();
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(AppError::config(format!(
                "TRIMP exponent must be a positive finite number, got {exponent}"
            )));
        }
        Ok(())
    }

    /// Session scorer for this configuration
    #[must_use]
    pub const fn scorer(&self) -> TrimpScorer {
        TrimpScorer::new(self.trimp_algorithm)
    }

    /// Load balance engine for this configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError` if either time constant is zero
    pub fn engine(&self) -> AppResult<LoadBalanceEngine> {
        LoadBalanceEngine::with_time_constants(self.acute_days, self.chronic_days)
    }
}
