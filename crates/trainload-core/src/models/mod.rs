// ABOUTME: Core data models consumed by the training-load engine
// ABOUTME: Re-exports WorkoutSample, IntensitySource, and AthleteProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The engine consumes plain in-memory values supplied by whatever data layer
//! surrounds it. Nothing here owns a connection, a cache, or any lifecycle.
//!
//! - `WorkoutSample`: one completed training session
//! - `IntensitySource`: which scoring path a session is eligible for
//! - `AthleteProfile`: read-only heart rate context for the athlete

mod athlete;
mod workout;

pub use athlete::AthleteProfile;
pub use workout::{IntensitySource, WorkoutSample};
