// ABOUTME: Configuration inspection command for nutritrack-cli
// ABOUTME: Prints the engine constants in effect after environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutritrack::config::NutritrackConfig;

use super::print_json;

/// Print the effective configuration
pub fn show(config: &NutritrackConfig) -> Result<()> {
    print_json(config)
}
