// ABOUTME: Configuration module for the trainload process
// ABOUTME: Re-exports environment-driven engine and athlete settings with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and process configuration
pub mod environment;

pub use environment::{ConfigOverrides, Environment, TrainloadConfig};
