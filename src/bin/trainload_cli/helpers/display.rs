// ABOUTME: Output formatting helpers for trainload-cli
// ABOUTME: Text tables for reports, scores, and zones plus pretty JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use trainload::errors::AppResult;
use trainload::intelligence::{TrainingLoadReport, TrainingZone, TrimpAlgorithm, WorkoutScore};

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the report snapshot followed by the most recent daily loads
pub fn display_report(report: &TrainingLoadReport, recent_days: usize) {
    let snapshot = &report.snapshot;

    println!(
        "\nTraining Load Report ({}, {}-day window)",
        report.reference_date, report.window_days
    );
    println!("{}", "=".repeat(60));
    println!("   Fitness (CTL):  {:>7.1}", snapshot.chronic);
    println!("   Fatigue (ATL):  {:>7.1}", snapshot.acute);
    println!("   Form (TSB):     {:>+7.1}", snapshot.balance);
    println!("   Ramp Rate:      {:>+7.1} per week", snapshot.ramp_rate);
    println!(
        "   Zone:           {} - {}",
        snapshot.zone,
        snapshot.zone.description()
    );

    let recent = report.daily.recent(recent_days);
    if !recent.is_empty() {
        println!("\nDaily load (last {} days):", recent.len());
        let skipped = report.daily.len() - recent.len();
        for (date, load) in report.daily.iter_dated().skip(skipped) {
            println!("   {date}  {load:>6.0}");
        }
    }

    println!("\nWorkouts in window: {}", report.workouts.len());
}

/// Display one line per scored workout
pub fn display_scores(scores: &[WorkoutScore], algorithm: TrimpAlgorithm) {
    println!("\nWorkout Scores ({})", algorithm.description());
    println!("{}", "=".repeat(60));
    for score in scores {
        println!(
            "   {}  {:>6.0}  {}",
            score.date.format("%Y-%m-%d %H:%M UTC"),
            score.load,
            score.method
        );
    }
    let total: f64 = scores.iter().map(|score| score.load).sum();
    println!("{}", "-".repeat(60));
    println!("   {} workouts, total load {total:.0}", scores.len());
}

/// Display a zone classification
pub fn display_zone(balance: f64, chronic: f64, zone: TrainingZone) {
    println!("Balance {balance:+.1}, chronic {chronic:.1}: {zone}");
    println!("   {}", zone.description());
}
