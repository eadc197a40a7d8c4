// ABOUTME: Trainload CLI - computes training load reports from exported workout JSON
// ABOUTME: Subcommands for the full report, per-workout scores, and zone lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full report for today over the default 60-day window
//! trainload-cli report workouts.json
//!
//! # Report for a past date as JSON, with the female Banister exponent
//! trainload-cli --format json report workouts.json --date 2025-03-10 --trimp bannister_female
//!
//! # Score every workout in a file
//! trainload-cli score workouts.json
//!
//! # Classify a balance/chronic pair
//! trainload-cli zone --balance -12.5 --chronic 48
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use trainload::config::{ConfigOverrides, TrainloadConfig};
use trainload::intelligence::TrimpAlgorithm;
use trainload::logging::{LogFormat, LoggingConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "trainload-cli",
    version,
    about = "Training load calculator",
    long_about = "Computes TRIMP session scores, acute/chronic training load, training stress balance, and training zones from workout JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute the full training load report
    Report {
        /// Workout JSON file
        input: PathBuf,

        /// Reference date (YYYY-MM-DD), defaults to today in UTC
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of recent days to list in text output
        #[arg(long, default_value = "14")]
        recent: usize,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Score every workout in a file
    Score {
        /// Workout JSON file
        input: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Classify a balance/chronic load pair into a training zone
    Zone {
        /// Training stress balance (chronic - acute)
        #[arg(long, allow_negative_numbers = true)]
        balance: f64,

        /// Chronic training load
        #[arg(long, allow_negative_numbers = true)]
        chronic: f64,
    },
}

/// Engine flags; each one set replaces the matching environment variable
#[derive(Args, Debug)]
struct EngineArgs {
    /// Trailing window in days
    #[arg(long)]
    window_days: Option<usize>,

    /// Acute load time constant in days
    #[arg(long)]
    acute_days: Option<usize>,

    /// Chronic load time constant in days
    #[arg(long)]
    chronic_days: Option<usize>,

    /// TRIMP exponent: bannister_male, bannister_female, or a number
    #[arg(long)]
    trimp: Option<TrimpAlgorithm>,

    /// Athlete maximum heart rate
    #[arg(long)]
    max_hr: Option<f64>,

    /// Athlete resting heart rate
    #[arg(long)]
    resting_hr: Option<f64>,
}

impl EngineArgs {
    /// Load environment configuration with these flags taking precedence
    fn load_config(&self) -> Result<TrainloadConfig> {
        let overrides = ConfigOverrides {
            window_days: self.window_days,
            acute_days: self.acute_days,
            chronic_days: self.chronic_days,
            trimp_algorithm: self.trimp,
            max_heart_rate: self.max_hr,
            resting_heart_rate: self.resting_hr,
        };
        let config = TrainloadConfig::from_env_with(&overrides)?;
        debug!("{}", config.summary());
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_format(LogFormat::Compact);
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    logging.init()?;

    match cli.command {
        Command::Report {
            input,
            date,
            recent,
            engine,
        } => {
            let config = engine.load_config()?;
            let reference_date = date.unwrap_or_else(|| Utc::now().date_naive());
            commands::report::run(&config, &input, reference_date, recent, cli.format)?;
        }
        Command::Score { input, engine } => {
            let config = engine.load_config()?;
            commands::score::run(&config, &input, cli.format)?;
        }
        Command::Zone { balance, chronic } => {
            commands::zone::run(balance, chronic, cli.format)?;
        }
    }

    Ok(())
}
