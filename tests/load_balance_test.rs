// ABOUTME: Integration tests for acute/chronic load smoothing, balance, and ramp rate
// ABOUTME: Exercises the warm-up rule, weighted window, and non-finite input handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use trainload::errors::ErrorCode;
use trainload::intelligence::algorithms::windowed_load;
use trainload::intelligence::{
    classify_zone, compute_balance, compute_ramp_rate, LoadBalanceEngine, TrainingZone,
};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_single_session_acute_load_during_warm_up() {
    let engine = LoadBalanceEngine::standard();
    let daily = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 50.0, 0.0, 0.0];

    let acute = engine.compute_acute_load(&daily);

    assert_eq!(acute.len(), daily.len());
    assert_close(acute[7], 6.25);
    assert_close(acute[8], 50.0 / 9.0);
    assert_close(acute[9], 5.0);
    assert!(acute[..7].iter().all(|value| value.abs() < TOLERANCE));
}

#[test]
fn test_constant_load_is_a_fixed_point() {
    let engine = LoadBalanceEngine::standard();
    let daily = vec![50.0; 60];

    let series = engine.compute(&daily);

    for day in 0..daily.len() {
        assert_close(series.acute[day], 50.0);
        assert_close(series.chronic[day], 50.0);
        assert_close(series.balance[day], 0.0);
    }
    assert_eq!(series.zone, TrainingZone::Productive);
    assert_close(series.ramp_rate, 0.0);
}

#[test]
fn test_weighted_window_after_warm_up() {
    let daily = [0.0, 0.0, 0.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0];

    let acute = windowed_load(&daily, 7);

    // Warm-up: history below 7 days averages over every day so far
    assert_close(acute[3], 15.0);
    assert_close(acute[8], 60.0 * 6.0 / 9.0);
    // History reaches 7 on day 9; the trailing window holds only 60s
    assert_close(acute[9], 60.0);
    assert_close(acute[10], 60.0);
}

#[test]
fn test_weighted_window_favours_recent_days() {
    let mut daily = vec![40.0; 20];
    daily.push(120.0);

    let acute = windowed_load(&daily, 7);
    let tau = 7.0_f64;
    let total_weight: f64 = (0..7).map(|i| (-f64::from(i) / tau).exp()).sum();
    let expected = (120.0 + 40.0 * (total_weight - 1.0)) / total_weight;

    assert_close(acute[20], expected);
    assert!(acute[20] > 40.0 + 80.0 / 7.0);
}

#[test]
fn test_empty_series() {
    let engine = LoadBalanceEngine::standard();
    let series = engine.compute(&[]);

    assert!(series.acute.is_empty());
    assert!(series.chronic.is_empty());
    assert!(series.balance.is_empty());
    assert_eq!(series.zone, TrainingZone::Detraining);
    assert_close(series.ramp_rate, 0.0);
}

#[test]
fn test_all_zero_series_stays_zero() {
    let engine = LoadBalanceEngine::standard();
    let series = engine.compute(&[0.0; 30]);

    assert!(series.acute.iter().all(|value| *value == 0.0));
    assert!(series.chronic.iter().all(|value| *value == 0.0));
    assert_eq!(series.zone, TrainingZone::Detraining);
}

#[test]
fn test_non_finite_and_negative_daily_values_read_as_zero() {
    let engine = LoadBalanceEngine::standard();
    let dirty = [f64::NAN, 30.0, f64::INFINITY, -20.0, 30.0, f64::NEG_INFINITY];
    let clean = [0.0, 30.0, 0.0, 0.0, 30.0, 0.0];

    let dirty_series = engine.compute(&dirty);
    let clean_series = engine.compute(&clean);

    assert_eq!(dirty_series, clean_series);
    assert!(dirty_series.acute.iter().all(|value| value.is_finite()));
    assert!(dirty_series.balance.iter().all(|value| value.is_finite()));
}

#[test]
fn test_balance_is_chronic_minus_acute_over_common_length() {
    let acute = [10.0, 20.0, 30.0, 40.0];
    let chronic = [15.0, 15.0, 15.0];

    let balance = compute_balance(&acute, &chronic);

    assert_eq!(balance, vec![5.0, -5.0, -15.0]);
    assert_eq!(compute_balance(&[f64::NAN], &[12.0]), vec![12.0]);
}

#[test]
fn test_ramp_rate_needs_seven_points() {
    assert_close(compute_ramp_rate(&[]), 0.0);
    assert_close(compute_ramp_rate(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]), 0.0);
    assert_close(
        compute_ramp_rate(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]),
        60.0,
    );
}

#[test]
fn test_ramp_rate_uses_trailing_week_and_rounds() {
    let chronic = [1.0, 2.0, 40.0, 40.5, 41.0, 41.2, 41.9, 42.33, 43.04];
    // 43.04 - 40.0
    assert_close(compute_ramp_rate(&chronic), 3.0);
    assert_close(compute_ramp_rate(&[50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 46.26]), -3.7);
    assert_close(compute_ramp_rate(&[f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 12.0]), 12.0);
}

#[test]
fn test_ramp_rate_from_building_block() {
    let engine = LoadBalanceEngine::standard();
    let mut daily = vec![0.0; 20];
    daily.extend(vec![80.0; 40]);

    let series = engine.compute(&daily);

    // Chronic is still in its 42-day warm-up, rising by 80/60 over the final week
    assert_close(series.latest_chronic(), 80.0 * 40.0 / 60.0);
    assert_close(series.latest_acute(), 80.0);
    assert_close(series.ramp_rate, 3.0);
    assert_eq!(series.zone, TrainingZone::Overreaching);
    assert_eq!(
        series.zone,
        classify_zone(series.latest_balance(), series.latest_chronic())
    );
}

#[test]
fn test_custom_time_constants() {
    let engine = LoadBalanceEngine::with_time_constants(3, 10).unwrap();
    assert_eq!(engine.acute_days(), 3);
    assert_eq!(engine.chronic_days(), 10);

    let daily = [0.0, 30.0, 30.0, 30.0, 90.0];
    let acute = engine.compute_acute_load(&daily);
    let weights: Vec<f64> = (0..3).map(|i| (-f64::from(i) / 3.0).exp()).collect();
    let expected = weights[0].mul_add(90.0, 30.0 * (weights[1] + weights[2]))
        / weights.iter().sum::<f64>();
    assert_close(acute[4], expected);

    let chronic = engine.compute_chronic_load(&daily);
    assert_close(chronic[4], 180.0 / 5.0);
}

#[test]
fn test_zero_time_constant_rejected() {
    let error = LoadBalanceEngine::with_time_constants(0, 42).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(LoadBalanceEngine::with_time_constants(7, 0).is_err());
    assert_eq!(windowed_load(&[10.0, 20.0], 0), vec![0.0, 0.0]);
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let engine = LoadBalanceEngine::standard();
    let daily: Vec<f64> = (0..90)
        .map(|day| f64::from((day * 37) % 11) * 13.7)
        .collect();

    let first = engine.compute(&daily);
    let second = engine.compute(&daily);

    let bits = |values: &[f64]| values.iter().map(|value| value.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first.acute), bits(&second.acute));
    assert_eq!(bits(&first.chronic), bits(&second.chronic));
    assert_eq!(bits(&first.balance), bits(&second.balance));
    assert_eq!(first.ramp_rate.to_bits(), second.ramp_rate.to_bits());
}

#[test]
fn test_engine_metadata() {
    let engine = LoadBalanceEngine::default();
    assert_eq!(engine, LoadBalanceEngine::standard());
    assert_eq!(engine.acute_days(), 7);
    assert_eq!(engine.chronic_days(), 42);
    assert!(engine.description().contains("τ=42d"));
    assert!(engine.formula().contains("e^(-i/τ)"));
}
