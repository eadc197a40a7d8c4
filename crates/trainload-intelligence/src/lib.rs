// ABOUTME: Training-load engine turning workout samples into load, fatigue, and form
// ABOUTME: Session scoring, daily aggregation, load balance smoothing, and zone classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload Intelligence
//!
//! Numeric core of the trainload workspace. Every entry point is a pure
//! function of its explicit inputs; nothing is cached between calls.
//!
//! ## Modules
//!
//! - **algorithms**: TRIMP session scoring, windowed ATL/CTL smoothing, zone table
//! - **daily_load**: Dense per-day load series over a trailing window
//! - **training_load**: End-to-end report pipeline
//! - **config**: Typed engine configuration

/// Session scoring, load balance smoothing, and zone classification
pub mod algorithms;

/// Typed engine configuration
pub mod config;

/// Per-day load aggregation
pub mod daily_load;

/// Full report pipeline from samples to snapshot
pub mod training_load;

pub use algorithms::{
    classify_zone, compute_balance, compute_ramp_rate, score_session, LoadBalanceEngine,
    LoadBalanceSeries, ScoringMethod, TrainingZone, TrimpAlgorithm, TrimpScorer,
};
pub use config::TrainingLoadConfig;
pub use daily_load::{build_daily_series, DailyLoadAggregator, DailyLoadSeries, WorkoutScore};
pub use training_load::{LoadSnapshot, TrainingLoadCalculator, TrainingLoadReport};
