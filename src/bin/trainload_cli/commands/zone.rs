// ABOUTME: Zone command for trainload-cli
// ABOUTME: Classifies a balance/chronic load pair and prints the zone status text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::json;
use trainload::errors::AppResult;
use trainload::intelligence::classify_zone;

use crate::helpers::display::{display_zone, print_json};
use crate::OutputFormat;

/// Classify and print a training zone
pub fn run(balance: f64, chronic: f64, format: OutputFormat) -> AppResult<()> {
    let zone = classify_zone(balance, chronic);
    match format {
        OutputFormat::Json => print_json(&json!({
            "balance": balance,
            "chronic": chronic,
            "zone": zone,
            "description": zone.description(),
        })),
        OutputFormat::Text => {
            display_zone(balance, chronic, zone);
            Ok(())
        }
    }
}
