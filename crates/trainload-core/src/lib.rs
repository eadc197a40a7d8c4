// ABOUTME: Core types and constants for the trainload training-load engine
// ABOUTME: Foundation crate with error handling, workout models, and reference constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload Core
//!
//! Foundation crate providing shared types and constants for the training-load
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Reference constants for scoring and load balance
//! - **models**: Workout samples and athlete profiles consumed by the engine

/// Unified error handling system with standard error codes
pub mod errors;

/// Reference constants organized by domain
pub mod constants;

/// Core data models (`WorkoutSample`, `AthleteProfile`)
pub mod models;
