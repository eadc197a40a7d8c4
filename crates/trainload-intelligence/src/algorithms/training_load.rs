// ABOUTME: Acute/chronic load and training stress balance over a dense daily load series
// ABOUTME: Backward-looking exponentially weighted windows with a mean-based warm-up rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use trainload_core::constants::training_load::{
    ACUTE_TIME_CONSTANT_DAYS, CHRONIC_TIME_CONSTANT_DAYS, RAMP_RATE_POINTS,
};
use trainload_core::errors::{AppError, AppResult};

use super::zones::TrainingZone;
use super::{finite_or_zero, round_to_tenth};

/// Load balance engine computing ATL, CTL, and TSB
///
/// For each day `t` of an oldest-first daily series `d`:
///
/// - *history* is the number of days from the first non-zero entry through `t`
/// - while history is shorter than the time constant `τ`, the load is the
///   arithmetic mean of `d[0..=t]`
/// - afterwards it is the weighted mean of the trailing `min(t + 1, τ)` days
///   with weights `exp(-i/τ)`, `i = 0` being day `t`
///
/// No seed value is carried between days, so every output is a pure function
/// of its trailing window.
///
/// # Scientific References
///
/// - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
/// - Coggan, A. (2003). "Training and Racing Using a Power Meter." *Peaksware LLC*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalanceEngine {
    acute_days: usize,
    chronic_days: usize,
}

impl Default for LoadBalanceEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl LoadBalanceEngine {
    /// Engine with the reference 7-day acute and 42-day chronic time constants
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            acute_days: ACUTE_TIME_CONSTANT_DAYS,
            chronic_days: CHRONIC_TIME_CONSTANT_DAYS,
        }
    }

    /// Engine with custom time constants
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either time constant is zero
    pub fn with_time_constants(acute_days: usize, chronic_days: usize) -> AppResult<Self> {
        if acute_days == 0 || chronic_days == 0 {
            return Err(AppError::invalid_input(format!(
                "Time constants must be positive, got acute={acute_days} chronic={chronic_days}"
            )));
        }
        Ok(Self {
            acute_days,
            chronic_days,
        })
    }

    /// Acute time constant in days
    #[must_use]
    pub const fn acute_days(&self) -> usize {
        self.acute_days
    }

    /// Chronic time constant in days
    #[must_use]
    pub const fn chronic_days(&self) -> usize {
        self.chronic_days
    }

    /// Acute Training Load (fatigue) for every day of the series
    #[must_use]
    pub fn compute_acute_load(&self, daily: &[f64]) -> Vec<f64> {
        windowed_load(daily, self.acute_days)
    }

    /// Chronic Training Load (fitness) for every day of the series
    #[must_use]
    pub fn compute_chronic_load(&self, daily: &[f64]) -> Vec<f64> {
        windowed_load(daily, self.chronic_days)
    }

    /// Run the full recurrence once over the series
    #[must_use]
    pub fn compute(&self, daily: &[f64]) -> LoadBalanceSeries {
        let acute = self.compute_acute_load(daily);
        let chronic = self.compute_chronic_load(daily);
        let balance = compute_balance(&acute, &chronic);

        let zone = TrainingZone::classify(
            balance.last().copied().unwrap_or(0.0),
            chronic.last().copied().unwrap_or(0.0),
        );
        let ramp_rate = compute_ramp_rate(&chronic);

        LoadBalanceSeries {
            acute,
            chronic,
            balance,
            zone,
            ramp_rate,
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        "load_t = Σ d[t-i]·e^(-i/τ) / Σ e^(-i/τ), i < min(t+1, τ); mean(d[0..=t]) during warm-up"
    }

    /// Get engine description
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "Windowed exponential average (ATL τ={}d, CTL τ={}d)",
            self.acute_days, self.chronic_days
        )
    }
}

/// Acute, chronic, and balance series plus the latest-day classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalanceSeries {
    /// Acute Training Load per day, oldest first
    pub acute: Vec<f64>,
    /// Chronic Training Load per day, oldest first
    pub chronic: Vec<f64>,
    /// Training Stress Balance (chronic - acute) per day, oldest first
    pub balance: Vec<f64>,
    /// Zone for the latest day
    pub zone: TrainingZone,
    /// Week-over-week chronic load change for the latest day
    pub ramp_rate: f64,
}

impl LoadBalanceSeries {
    /// Acute load on the latest day
    #[must_use]
    pub fn latest_acute(&self) -> f64 {
        self.acute.last().copied().unwrap_or(0.0)
    }

    /// Chronic load on the latest day
    #[must_use]
    pub fn latest_chronic(&self) -> f64 {
        self.chronic.last().copied().unwrap_or(0.0)
    }

    /// Balance on the latest day
    #[must_use]
    pub fn latest_balance(&self) -> f64 {
        self.balance.last().copied().unwrap_or(0.0)
    }
}

/// Windowed exponentially weighted load with the warm-up mean rule
///
/// Non-finite and negative daily values are read as 0. A zero time constant
/// yields an all-zero series.
#[must_use]
pub fn windowed_load(daily: &[f64], time_constant_days: usize) -> Vec<f64> {
    if time_constant_days == 0 {
        return vec![0.0; daily.len()];
    }

    let tau = time_constant_days as f64;
    let weights: Vec<f64> = (0..time_constant_days)
        .map(|i| (-(i as f64) / tau).exp())
        .collect();
    let loads: Vec<f64> = daily.iter().copied().map(daily_value).collect();

    let mut first_active: Option<usize> = None;
    let mut running_sum = 0.0;

    loads
        .iter()
        .enumerate()
        .map(|(day, &value)| {
            running_sum += value;
            if first_active.is_none() && value > 0.0 {
                first_active = Some(day);
            }
            let history = first_active.map_or(0, |first| day - first + 1);

            let load = if history < time_constant_days {
                running_sum / (day + 1) as f64
            } else {
                let window = (day + 1).min(time_constant_days);
                let (weighted, total_weight) = weights[..window].iter().enumerate().fold(
                    (0.0, 0.0),
                    |(weighted, total), (offset, &weight)| {
                        (loads[day - offset].mul_add(weight, weighted), total + weight)
                    },
                );
                weighted / total_weight
            };

            finite_or_zero(load)
        })
        .collect()
}

/// Training Stress Balance (chronic - acute) per day over the common length
#[must_use]
pub fn compute_balance(acute: &[f64], chronic: &[f64]) -> Vec<f64> {
    acute
        .iter()
        .zip(chronic)
        .map(|(&atl, &ctl)| finite_or_zero(finite_or_zero(ctl) - finite_or_zero(atl)))
        .collect()
}

/// Week-over-week chronic load change, rounded to one decimal
///
/// Compares the latest chronic load with the first of the trailing seven
/// points. Fewer than seven points yields 0.
#[must_use]
pub fn compute_ramp_rate(chronic: &[f64]) -> f64 {
    if chronic.len() < RAMP_RATE_POINTS {
        return 0.0;
    }
    let latest = finite_or_zero(chronic[chronic.len() - 1]);
    let week_start = finite_or_zero(chronic[chronic.len() - RAMP_RATE_POINTS]);
    round_to_tenth(latest - week_start)
}

fn daily_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
