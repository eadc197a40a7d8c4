// ABOUTME: Environment configuration for the training-load engine and its host process
// ABOUTME: Parses TRAINLOAD_* variables into typed engine and athlete defaults with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Every setting has a built-in default, so an empty environment yields a
//! working configuration. Values that are present but unparseable are
//! rejected with `ConfigInvalid` naming the offending variable.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use trainload_core::constants::heart_rate::{DEFAULT_MAX_HEART_RATE, DEFAULT_RESTING_HEART_RATE};
use trainload_core::constants::training_load::{
    ACUTE_TIME_CONSTANT_DAYS, CHRONIC_TIME_CONSTANT_DAYS, DEFAULT_WINDOW_DAYS,
};
use trainload_core::errors::{AppError, AppResult};
use trainload_core::models::AthleteProfile;
use trainload_intelligence::{TrainingLoadConfig, TrimpAlgorithm};

/// Trailing window length in days
pub const WINDOW_DAYS_VAR: &str = "TRAINLOAD_WINDOW_DAYS";
/// Acute load time constant in days
pub const ACUTE_DAYS_VAR: &str = "TRAINLOAD_ACUTE_DAYS";
/// Chronic load time constant in days
pub const CHRONIC_DAYS_VAR: &str = "TRAINLOAD_CHRONIC_DAYS";
/// TRIMP exponent selection
pub const TRIMP_ALGORITHM_VAR: &str = "TRAINLOAD_TRIMP_ALGORITHM";
/// Default athlete maximum heart rate
pub const MAX_HR_VAR: &str = "TRAINLOAD_MAX_HR";
/// Default athlete resting heart rate
pub const RESTING_HR_VAR: &str = "TRAINLOAD_RESTING_HR";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
            Self::Testing => f.write_str("testing"),
        }
    }
}

/// Explicit values that take precedence over the environment
///
/// A field set here is used as-is and the matching variable is never read,
/// so a malformed variable can be corrected from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Trailing window length in days
    pub window_days: Option<usize>,
    /// Acute load time constant in days
    pub acute_days: Option<usize>,
    /// Chronic load time constant in days
    pub chronic_days: Option<usize>,
    /// TRIMP exponent selection
    pub trimp_algorithm: Option<TrimpAlgorithm>,
    /// Athlete maximum heart rate
    pub max_heart_rate: Option<f64>,
    /// Athlete resting heart rate
    pub resting_heart_rate: Option<f64>,
}

/// Process-level configuration assembled from the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainloadConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Engine settings
    pub engine: TrainingLoadConfig,
    /// Athlete defaults used when input rows carry no profile
    pub athlete: AthleteProfile,
}

impl TrainloadConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` when a variable is set to a
    /// value that cannot be parsed, or the resulting configuration fails
    /// validation
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with(&ConfigOverrides::default())
    }

    /// Load configuration from environment variables, with `overrides` taking
    /// precedence, and validate the merged result once
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` when a variable without an
    /// override cannot be parsed, or the merged configuration fails validation
    pub fn from_env_with(overrides: &ConfigOverrides) -> AppResult<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            engine: TrainingLoadConfig {
                window_days: override_or_env(
                    overrides.window_days,
                    WINDOW_DAYS_VAR,
                    DEFAULT_WINDOW_DAYS,
                )?,
                acute_days: override_or_env(
                    overrides.acute_days,
                    ACUTE_DAYS_VAR,
                    ACUTE_TIME_CONSTANT_DAYS,
                )?,
                chronic_days: override_or_env(
                    overrides.chronic_days,
                    CHRONIC_DAYS_VAR,
                    CHRONIC_TIME_CONSTANT_DAYS,
                )?,
                trimp_algorithm: override_or_env(
                    overrides.trimp_algorithm,
                    TRIMP_ALGORITHM_VAR,
                    TrimpAlgorithm::default(),
                )?,
            },
            athlete: AthleteProfile::new(
                override_or_env(overrides.max_heart_rate, MAX_HR_VAR, DEFAULT_MAX_HEART_RATE)?,
                override_or_env(
                    overrides.resting_heart_rate,
                    RESTING_HR_VAR,
                    DEFAULT_RESTING_HEART_RATE,
                )?,
            ),
        };

        config.validate()?;
        info!(
            environment = %config.environment,
            window_days = config.engine.window_days,
            trimp = %config.engine.trimp_algorithm,
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ConfigInvalid` if the engine configuration is
    /// invalid or the athlete heart rates are not positive with max above resting
    pub fn validate(&self) -> AppResult<()> {
        self.engine.validate()?;

        let AthleteProfile {
            max_heart_rate,
            resting_heart_rate,
        } = self.athlete;
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(max_heart_rate) || !positive(resting_heart_rate) {
            return Err(AppError::config(format!(
                "{MAX_HR_VAR} and {RESTING_HR_VAR} must be positive, got {max_heart_rate} and {resting_heart_rate}"
            )));
        }
        if max_heart_rate <= resting_heart_rate {
            return Err(AppError::config(format!(
                "{MAX_HR_VAR} ({max_heart_rate}) must exceed {RESTING_HR_VAR} ({resting_heart_rate})"
            )));
        }

        if self.engine.window_days < self.engine.chronic_days {
            warn!(
                window_days = self.engine.window_days,
                chronic_days = self.engine.chronic_days,
                "Window is shorter than the chronic time constant; chronic load stays in warm-up"
            );
        }
        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trainload Configuration:\n\
             - Environment: {}\n\
             - Window: {} days\n\
             - Acute Time Constant: {} days\n\
             - Chronic Time Constant: {} days\n\
             - TRIMP: {}\n\
             - Athlete Max HR: {}\n\
             - Athlete Resting HR: {}",
            self.environment,
            self.engine.window_days,
            self.engine.acute_days,
            self.engine.chronic_days,
            self.engine.trimp_algorithm.description(),
            self.athlete.max_heart_rate,
            self.athlete.resting_heart_rate,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an optional environment variable, keeping `default` when unset or blank
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        _ => Ok(default),
    }
}

/// Use the explicit value when present, otherwise read the variable
fn override_or_env<T>(value: Option<T>, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.map_or_else(|| parse_env(key, default), Ok)
}
