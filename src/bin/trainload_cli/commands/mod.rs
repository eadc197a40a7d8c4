// ABOUTME: Command modules for trainload-cli
// ABOUTME: Report, score, and zone subcommand implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod report;
pub mod score;
pub mod zone;
