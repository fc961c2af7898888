// ABOUTME: NutriTrack CLI - computes health metrics and recommendation payloads from the command line
// ABOUTME: Prints HealthMetrics, RecommendationRequest, or the effective engine configuration as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Metrics for the default profile
//! nutritrack-cli metrics
//!
//! # Metrics for a custom profile (measurements are coerced like form input)
//! nutritrack-cli metrics --height 165 --weight 60 --waist 70 --age 30 \
//!     --gender Female --activity Sedentary --goal "Weight Loss"
//!
//! # Full payload for the recommendation service
//! nutritrack-cli request --fav-food "paneer, dal" --cuisine Mediterranean --dietary Vegetarian
//!
//! # Effective engine configuration after NUTRITRACK_* overrides
//! nutritrack-cli config
//! ```

mod args;
mod commands;

use anyhow::Result;
use args::{PreferenceArgs, ProfileArgs};
use clap::{Parser, Subcommand};
use nutritrack::config::NutritrackConfig;
use nutritrack::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutritrack-cli",
    about = "NutriTrack health metrics CLI",
    long_about = "Computes BMI, waist-to-height ratio, calorie and macro targets from body measurements."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute health metrics for a profile
    Metrics {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Build the recommendation service request payload
    Request {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },

    /// Show the effective engine configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = NutritrackConfig::load()?;
    debug!("Configuration loaded and validated");

    match cli.command {
        Command::Metrics { profile } => commands::metrics::metrics(&config, &profile)?,
        Command::Request {
            profile,
            preferences,
        } => commands::metrics::request(&config, &profile, &preferences)?,
        Command::Config => commands::config::show(&config)?,
    }

    Ok(())
}
