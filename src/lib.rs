// ABOUTME: Main library entry point for the trainload training-load engine
// ABOUTME: Wires environment configuration, logging, and workout import around the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload
//!
//! Turns completed workouts into training load metrics:
//!
//! - a per-session TRIMP score (heart rate reserve, or pace and elevation)
//! - a dense daily load series over a trailing window
//! - Acute Training Load, Chronic Training Load, and Training Stress Balance
//! - a training zone and week-over-week ramp rate for the latest day
//!
//! ## Architecture
//!
//! - **`trainload-core`**: error types, workout and athlete models, constants
//! - **`trainload-intelligence`**: scoring, aggregation, smoothing, and the report pipeline
//! - **this crate**: environment configuration, logging, workout import, and the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use trainload::errors::AppResult;
//! use trainload::intelligence::{TrainingLoadCalculator, TrainingZone};
//! use trainload::models::{AthleteProfile, WorkoutSample};
//!
//! fn main() -> AppResult<()> {
//!     let run = WorkoutSample::new(Utc.with_ymd_and_hms(2025, 3, 10, 7, 0, 0).unwrap(), 3600.0)
//!         .with_avg_heart_rate(150);
//!     let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//!
//!     let report = TrainingLoadCalculator::standard()?.calculate(
//!         &[run],
//!         today,
//!         &AthleteProfile::default(),
//!     );
//!
//!     assert_eq!(report.daily.len(), 60);
//!     assert_eq!(report.snapshot.zone, TrainingZone::Detraining);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Workout import from JSON
pub mod workouts;

/// Unified error handling
pub use trainload_core::errors;

/// Reference constants
pub use trainload_core::constants;

/// Workout and athlete models
pub use trainload_core::models;

/// Scoring, aggregation, smoothing, and report pipeline
pub use trainload_intelligence as intelligence;
