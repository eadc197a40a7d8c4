// ABOUTME: Criterion benchmarks for the training-load engine
// ABOUTME: Measures session scoring, daily aggregation, load balance smoothing, and the full pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the training-load engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_daily_loads, generate_workouts, reference_date, WorkoutBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trainload::intelligence::{
    build_daily_series, score_session, LoadBalanceEngine, TrainingLoadCalculator,
    TrainingLoadConfig,
};
use trainload::models::AthleteProfile;

/// Benchmark per-session TRIMP scoring
fn bench_session_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_scoring");
    let profile = AthleteProfile::new(186.0, 52.0);
    let workouts = generate_workouts(WorkoutBatchSize::Medium);

    group.throughput(Throughput::Elements(workouts.len() as u64));
    group.bench_function("score_180_sessions", |b| {
        b.iter(|| {
            workouts
                .iter()
                .map(|sample| score_session(black_box(sample), &profile))
                .sum::<f64>()
        });
    });

    group.finish();
}

/// Benchmark daily aggregation with varying history sizes
fn bench_daily_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_aggregation");
    let profile = AthleteProfile::default();

    for size in WorkoutBatchSize::ALL {
        let workouts = generate_workouts(size);
        group.throughput(Throughput::Elements(workouts.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("build_daily_series", size.count()),
            &workouts,
            |b, workouts| {
                b.iter(|| build_daily_series(black_box(workouts), 60, reference_date(), &profile));
            },
        );
    }

    group.finish();
}

/// Benchmark ATL/CTL smoothing over different window lengths
fn bench_load_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_balance");
    let engine = LoadBalanceEngine::standard();

    for days in [42_usize, 60, 365] {
        let daily = generate_daily_loads(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("compute", days), &daily, |b, daily| {
            b.iter(|| engine.compute(black_box(daily)));
        });
    }

    group.finish();
}

/// Benchmark the full report pipeline
fn bench_training_load_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("training_load");
    let profile = AthleteProfile::default();

    for window_days in [60_usize, 365] {
        let config = TrainingLoadConfig {
            window_days,
            ..TrainingLoadConfig::default()
        };
        let Ok(calculator) = TrainingLoadCalculator::new(&config) else {
            continue;
        };
        let workouts = generate_workouts(WorkoutBatchSize::Large);

        group.bench_with_input(
            BenchmarkId::new("calculate", window_days),
            &workouts,
            |b, workouts| {
                b.iter(|| calculator.calculate(black_box(workouts), reference_date(), &profile));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_session_scoring,
    bench_daily_aggregation,
    bench_load_balance,
    bench_training_load_pipeline,
);
criterion_main!(benches);
