// ABOUTME: Re-exports command modules for nutritrack-cli
// ABOUTME: Provides access to metrics, request, and config commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod config;
pub mod metrics;

use anyhow::Result;
use serde::Serialize;

/// Write a value to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
