// ABOUTME: Report command for trainload-cli
// ABOUTME: Loads workouts, runs the full pipeline, and prints the snapshot and recent daily load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;
use trainload::config::TrainloadConfig;
use trainload::errors::AppResult;
use trainload::intelligence::TrainingLoadCalculator;
use trainload::workouts::load_workouts;

use crate::helpers::display::{display_report, print_json};
use crate::OutputFormat;

/// Compute and print the training load report for `reference_date`
pub fn run(
    config: &TrainloadConfig,
    input: &Path,
    reference_date: NaiveDate,
    recent_days: usize,
    format: OutputFormat,
) -> AppResult<()> {
    let import = load_workouts(input)?;
    let profile = import.athlete_or(config.athlete);
    let calculator = TrainingLoadCalculator::new(&config.engine)?;
    let report = calculator.calculate(&import.workouts, reference_date, &profile);

    info!(
        %reference_date,
        workouts = report.workouts.len(),
        zone = %report.snapshot.zone,
        "Report computed"
    );

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            display_report(&report, recent_days);
            Ok(())
        }
    }
}
