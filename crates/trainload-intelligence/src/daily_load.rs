// ABOUTME: Daily load aggregation into a dense, oldest-first series over a trailing window
// ABOUTME: Scores sessions in parallel, then buckets them by UTC calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Days, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use trainload_core::errors::{AppError, AppResult};
use trainload_core::models::{AthleteProfile, WorkoutSample};

use crate::algorithms::{ScoringMethod, TrimpScorer};

/// Summed session load per calendar day
///
/// Index 0 is the oldest day; the last index is the reference day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLoadSeries {
    reference_date: NaiveDate,
    values: Vec<f64>,
}

impl DailyLoadSeries {
    /// Daily loads, oldest first
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Window length in days
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Day the last entry belongs to
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Load on the reference day
    #[must_use]
    pub fn latest(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// The most recent `days` entries, oldest first
    ///
    /// Asking for more days than the window holds returns the whole series.
    #[must_use]
    pub fn recent(&self, days: usize) -> &[f64] {
        let start = self.values.len().saturating_sub(days);
        &self.values[start..]
    }

    /// Calendar date of the entry at `index`
    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        let offset = self.values.len().checked_sub(index.checked_add(1)?)?;
        self.reference_date.checked_sub_days(Days::new(offset as u64))
    }

    /// Pairs of (calendar date, load), oldest first
    pub fn iter_dated(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(index, &load)| self.date_at(index).map(|date| (date, load)))
    }

    /// Sum of every daily load in the window
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Score of one session that fell inside the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutScore {
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Rounded session load
    pub load: f64,
    /// Scoring path used
    pub method: ScoringMethod,
}

/// Buckets session scores into a fixed trailing window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyLoadAggregator {
    window_days: usize,
    scorer: TrimpScorer,
}

impl DailyLoadAggregator {
    /// Create an aggregator over `window_days` days
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `window_days` is zero
    pub fn new(window_days: usize, scorer: TrimpScorer) -> AppResult<Self> {
        if window_days == 0 {
            return Err(AppError::invalid_input(
                "window_days must be at least 1 to build a daily load series",
            ));
        }
        Ok(Self {
            window_days,
            scorer,
        })
    }

    /// Window length in days
    #[must_use]
    pub const fn window_days(&self) -> usize {
        self.window_days
    }

    /// Series bucket for a session day, or `None` when outside the window
    ///
    /// Future days and days `window_days` or more before the reference day
    /// are outside.
    #[must_use]
    pub fn bucket_index(&self, day: NaiveDate, reference_date: NaiveDate) -> Option<usize> {
        let days_ago = usize::try_from(reference_date.signed_duration_since(day).num_days()).ok()?;
        if days_ago < self.window_days {
            Some(self.window_days - 1 - days_ago)
        } else {
            None
        }
    }

    /// Score every in-window session, in input order
    ///
    /// Scoring fans out over the rayon pool; collection preserves input order.
    #[must_use]
    pub fn score_workouts(
        &self,
        samples: &[WorkoutSample],
        reference_date: NaiveDate,
        profile: &AthleteProfile,
    ) -> Vec<(usize, WorkoutScore)> {
        let scorer = self.scorer;
        let scored: Vec<Option<(usize, WorkoutScore)>> = samples
            .par_iter()
            .map(|sample| {
                let bucket = self.bucket_index(sample.day(), reference_date)?;
                let score = WorkoutScore {
                    date: sample.date,
                    load: scorer.score(sample, profile),
                    method: ScoringMethod::for_sample(sample),
                };
                Some((bucket, score))
            })
            .collect();

        let dropped = scored.iter().filter(|entry| entry.is_none()).count();
        if dropped > 0 {
            trace!(
                dropped,
                window_days = self.window_days,
                %reference_date,
                "Dropped samples outside the load window"
            );
        }

        scored.into_iter().flatten().collect()
    }

    /// Build the dense daily series
    #[must_use]
    pub fn build(
        &self,
        samples: &[WorkoutSample],
        reference_date: NaiveDate,
        profile: &AthleteProfile,
    ) -> DailyLoadSeries {
        let scored = self.score_workouts(samples, reference_date, profile);
        Self::series_from_scores(self.window_days, reference_date, &scored)
    }

    /// Sum bucketed scores sequentially so results never depend on thread scheduling
    pub(crate) fn series_from_scores(
        window_days: usize,
        reference_date: NaiveDate,
        scored: &[(usize, WorkoutScore)],
    ) -> DailyLoadSeries {
        let mut values = vec![0.0; window_days];
        for (bucket, score) in scored {
            values[*bucket] += score.load;
        }

        debug!(
            window_days,
            %reference_date,
            sessions = scored.len(),
            "Built daily load series"
        );

        DailyLoadSeries {
            reference_date,
            values,
        }
    }
}

/// Build a daily load series with the default scorer
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `window_days` is zero
pub fn build_daily_series(
    samples: &[WorkoutSample],
    window_days: usize,
    reference_date: NaiveDate,
    profile: &AthleteProfile,
) -> AppResult<DailyLoadSeries> {
    let aggregator = DailyLoadAggregator::new(window_days, TrimpScorer::default())?;
    Ok(aggregator.build(samples, reference_date, profile))
}
