// ABOUTME: Score command for trainload-cli
// ABOUTME: Scores every workout in a file regardless of date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use trainload::config::TrainloadConfig;
use trainload::errors::AppResult;
use trainload::intelligence::{ScoringMethod, WorkoutScore};
use trainload::workouts::load_workouts;

use crate::helpers::display::{display_scores, print_json};
use crate::OutputFormat;

/// Score and print every workout in `input`
pub fn run(config: &TrainloadConfig, input: &Path, format: OutputFormat) -> AppResult<()> {
    let import = load_workouts(input)?;
    let profile = import.athlete_or(config.athlete);
    let scorer = config.engine.scorer();

    let scores: Vec<WorkoutScore> = import
        .workouts
        .iter()
        .map(|sample| WorkoutScore {
            date: sample.date,
            load: scorer.score(sample, &profile),
            method: ScoringMethod::for_sample(sample),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&scores),
        OutputFormat::Text => {
            display_scores(&scores, config.engine.trimp_algorithm);
            Ok(())
        }
    }
}
