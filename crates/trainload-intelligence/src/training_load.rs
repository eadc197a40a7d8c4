// ABOUTME: End-to-end training-load pipeline from workout samples to a latest-day snapshot
// ABOUTME: Composes session scoring, daily aggregation, and load balance smoothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainload_core::errors::AppResult;
use trainload_core::models::{AthleteProfile, WorkoutSample};

use crate::algorithms::{round_to_tenth, LoadBalanceEngine, LoadBalanceSeries, TrainingZone};
use crate::config::TrainingLoadConfig;
use crate::daily_load::{DailyLoadAggregator, DailyLoadSeries, WorkoutScore};

/// Latest-day values rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSnapshot {
    /// Acute Training Load (fatigue)
    pub acute: f64,
    /// Chronic Training Load (fitness)
    pub chronic: f64,
    /// Training Stress Balance (form)
    pub balance: f64,
    /// Week-over-week chronic load change
    pub ramp_rate: f64,
    /// Zone classification
    pub zone: TrainingZone,
}

impl LoadSnapshot {
    /// Snapshot of the last day of a load balance series
    ///
    /// The zone is classified from unrounded values.
    #[must_use]
    pub fn from_series(series: &LoadBalanceSeries) -> Self {
        Self {
            acute: round_to_tenth(series.latest_acute()),
            chronic: round_to_tenth(series.latest_chronic()),
            balance: round_to_tenth(series.latest_balance()),
            ramp_rate: series.ramp_rate,
            zone: series.zone,
        }
    }
}

/// Everything computed for one reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadReport {
    /// Day the window ends on
    pub reference_date: NaiveDate,
    /// Window length in days
    pub window_days: usize,
    /// Dense daily load series
    pub daily: DailyLoadSeries,
    /// Acute, chronic, and balance series
    pub load_balance: LoadBalanceSeries,
    /// Scores of the sessions inside the window, in input order
    pub workouts: Vec<WorkoutScore>,
    /// Rounded latest-day values
    pub snapshot: LoadSnapshot,
}

/// Runs the full pipeline: score, aggregate, smooth, classify
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingLoadCalculator {
    aggregator: DailyLoadAggregator,
    engine: LoadBalanceEngine,
}

impl TrainingLoadCalculator {
    /// Create a calculator from engine configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the configuration does not validate
    pub fn new(config: &TrainingLoadConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            aggregator: DailyLoadAggregator::new(config.window_days, config.scorer())?,
            engine: config.engine()?,
        })
    }

    /// Calculator with the default 60-day window, 7/42-day constants, and male exponent
    ///
    /// # Errors
    ///
    /// Returns `AppError` only if the built-in defaults are invalid
    pub fn standard() -> AppResult<Self> {
        Self::new(&TrainingLoadConfig::default())
    }

    /// Load balance engine in use
    #[must_use]
    pub const fn engine(&self) -> &LoadBalanceEngine {
        &self.engine
    }

    /// Window length in days
    #[must_use]
    pub const fn window_days(&self) -> usize {
        self.aggregator.window_days()
    }

    /// Compute the report for `reference_date`
    #[must_use]
    pub fn calculate(
        &self,
        samples: &[WorkoutSample],
        reference_date: NaiveDate,
        profile: &AthleteProfile,
    ) -> TrainingLoadReport {
        let window_days = self.aggregator.window_days();
        let scored = self
            .aggregator
            .score_workouts(samples, reference_date, profile);
        let daily = DailyLoadAggregator::series_from_scores(window_days, reference_date, &scored);
        let load_balance = self.engine.compute(daily.values());
        let snapshot = LoadSnapshot::from_series(&load_balance);

        debug!(
            %reference_date,
            window_days,
            samples = samples.len(),
            in_window = scored.len(),
            acute = snapshot.acute,
            chronic = snapshot.chronic,
            balance = snapshot.balance,
            zone = %snapshot.zone,
            "Calculated training load"
        );

        TrainingLoadReport {
            reference_date,
            window_days,
            daily,
            load_balance,
            workouts: scored.into_iter().map(|(_, score)| score).collect(),
            snapshot,
        }
    }
}
