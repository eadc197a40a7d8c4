// ABOUTME: Algorithm layer for session scoring, load smoothing, and zone classification
// ABOUTME: Enum-based algorithm selection with pure, total numeric functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Every function here is pure: no I/O, no shared state, and no error path for
//! numeric degeneracy. Invalid numbers resolve to 0 (or, for zones, to the
//! classification of 0) instead of propagating `NaN`.
//!
//! # Example
//!
//! ```rust
//! use trainload_intelligence::algorithms::{classify_zone, LoadBalanceEngine, TrainingZone};
//!
//! let engine = LoadBalanceEngine::standard();
//! let daily = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 50.0, 0.0, 0.0];
//! let acute = engine.compute_acute_load(&daily);
//! assert!((acute[9] - 5.0).abs() < 1e-9);
//! assert_eq!(classify_zone(-5.0, 20.0), TrainingZone::Detraining);
//! ```

pub mod training_load;
pub mod trimp;
pub mod zones;

pub use training_load::{
    compute_balance, compute_ramp_rate, windowed_load, LoadBalanceEngine, LoadBalanceSeries,
};
pub use trimp::{score_session, ScoringMethod, TrimpAlgorithm, TrimpScorer};
pub use zones::{classify_zone, TrainingZone};

/// Collapse `NaN` and infinities to 0
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to one decimal place for presentation
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    finite_or_zero((value * 10.0).round() / 10.0)
}
