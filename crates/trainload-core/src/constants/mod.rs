// ABOUTME: Reference constants for session scoring, daily aggregation, and load balance
// ABOUTME: Values are defaults only; every time constant and exponent is configurable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference constants based on sports science literature
//!
//! These are the defaults the engine ships with. The smoothing time constants
//! and the Banister exponent can be overridden through `TrainingLoadConfig`.

/// Athlete heart rate defaults used when no profile value is available
pub mod heart_rate {
    /// Default maximum heart rate (bpm)
    pub const DEFAULT_MAX_HEART_RATE: f64 = 190.0;

    /// Default resting heart rate (bpm)
    pub const DEFAULT_RESTING_HEART_RATE: f64 = 60.0;
}

/// Banister TRIMP constants
///
/// References:
/// - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
/// - Morton, R.H., Fitz-Clarke, J.R., Banister, E.W. (1990). "Modeling human performance in running."
pub mod trimp {
    /// Linear multiplier applied to the heart rate reserve fraction
    pub const BASE_MULTIPLIER: f64 = 0.64;

    /// Exponential weighting for male athletes
    pub const MALE_EXPONENTIAL_FACTOR: f64 = 1.92;

    /// Exponential weighting for female athletes
    pub const FEMALE_EXPONENTIAL_FACTOR: f64 = 1.67;

    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Pace-based fallback scoring used when a session has no heart rate data
pub mod pace {
    /// Pace thresholds (min/km, exclusive upper bound) paired with intensity factors,
    /// evaluated fastest first
    pub const INTENSITY_TABLE: [(f64, f64); 6] = [
        (4.0, 0.9),
        (4.5, 0.8),
        (5.0, 0.7),
        (5.5, 0.6),
        (6.0, 0.5),
        (7.0, 0.4),
    ];

    /// Intensity factor for paces at or above the slowest threshold
    pub const SLOWEST_INTENSITY_FACTOR: f64 = 0.3;

    /// Elevation gain (m) that earns one full unit of bonus
    pub const ELEVATION_BONUS_SCALE_M: f64 = 1000.0;

    /// Upper bound on the elevation bonus
    pub const MAX_ELEVATION_BONUS: f64 = 0.2;
}

/// Load balance windows and zone thresholds
///
/// References:
/// - Coggan, A. (2003). "Training and Racing Using a Power Meter." *Peaksware LLC*.
/// - Gabbett, T.J. (2016). "The training-injury prevention paradox." *Br J Sports Med*, 50(5), 273-280.
pub mod training_load {
    /// Default trailing window (days) for the daily load series
    pub const DEFAULT_WINDOW_DAYS: usize = 60;

    /// Acute load time constant (days), proxy for fatigue
    pub const ACUTE_TIME_CONSTANT_DAYS: usize = 7;

    /// Chronic load time constant (days), proxy for fitness
    pub const CHRONIC_TIME_CONSTANT_DAYS: usize = 42;

    /// Chronic-load points spanned by the week-over-week ramp rate
    pub const RAMP_RATE_POINTS: usize = 7;

    /// Chronic load below which an athlete is always classified as detraining
    pub const DETRAINING_CHRONIC_THRESHOLD: f64 = 30.0;

    /// Balance above which the athlete is in recovery
    pub const RECOVERY_BALANCE: f64 = 25.0;

    /// Balance above which the athlete is maintaining
    pub const MAINTENANCE_BALANCE: f64 = 5.0;

    /// Balance above which training is productive
    pub const PRODUCTIVE_BALANCE: f64 = -10.0;

    /// Balance above which training load is optimal
    pub const OPTIMAL_BALANCE: f64 = -25.0;

    /// Balance above which the athlete is overreaching; below it is overtraining
    pub const OVERREACHING_BALANCE: f64 = -40.0;
}
